#![no_main]

use libfuzzer_sys::fuzz_target;
use pgtemporal::decode_date;

fuzz_target!(|data: &[u8]| {
    if let Ok(Some(date)) = decode_date(Some(data)) {
        // We check that the printed value is decoded back
        let printed = date.to_string();
        assert_eq!(
            decode_date(Some(printed.as_bytes())).unwrap(),
            Some(date),
            "{printed}"
        );
    }
});
