#![no_main]

use libfuzzer_sys::fuzz_target;
use pgtemporal::decode_interval;

fuzz_target!(|data: &[u8]| {
    let duration = decode_interval(Some(data)).expect("intervals are always decoded");
    // Normalization keeps the total length
    if let Some(normalized) = duration.normalized() {
        assert_eq!(normalized, duration);
        assert!((0..86_400).contains(&normalized.seconds()));
        assert!((0..1_000_000).contains(&normalized.microseconds()));
    }
    let _ = duration.to_string();
});
