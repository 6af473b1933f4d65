#![no_main]

use libfuzzer_sys::fuzz_target;
use pgtemporal::{DecodeContext, FixedOffsetFactory, decode_timestamp};

fuzz_target!(|data: &[u8]| {
    let aware = DecodeContext::new().decode_timestamp(Some(data));
    let naive = DecodeContext::naive().decode_timestamp(Some(data));
    // The factory only changes the timezone
    match (&aware, &naive) {
        (Ok(aware), Ok(naive)) => assert_eq!(aware.map(|v| v.naive()), *naive),
        (Ok(_), Err(_)) => panic!("the naive decoding failed but not the aware one"),
        (Err(_), _) => (),
    }
    if let Ok(Some(timestamp)) = aware {
        let printed = timestamp.to_string();
        assert_eq!(
            decode_timestamp(Some(printed.as_bytes()), Some(&FixedOffsetFactory)).unwrap(),
            Some(timestamp),
            "{printed}"
        );
    }
});
