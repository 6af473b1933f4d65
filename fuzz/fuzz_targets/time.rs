#![no_main]

use libfuzzer_sys::fuzz_target;
use pgtemporal::decode_time;

fuzz_target!(|data: &[u8]| {
    if let Ok(Some(time)) = decode_time(Some(data)) {
        let printed = time.to_string();
        assert_eq!(
            decode_time(Some(printed.as_bytes())).unwrap(),
            Some(time),
            "{printed}"
        );
    }
});
