#![allow(clippy::panic)]

use codspeed_criterion_compat::{Criterion, Throughput, criterion_group, criterion_main};
use pgtemporal::{
    DecodeContext, InvalidTimezoneError, decode_date, decode_interval, decode_time,
    decode_timestamp,
};
use std::hint::black_box;

const DATES: [&str; 4] = ["2001-02-03", "1999-12-31", "infinity", "0001-01-01"];
const TIMES: [&str; 4] = ["04:05:06", "23:59:59.999999", "12:00:60.5", "00:00:00"];
const TIMESTAMPS: [&str; 4] = [
    "2001-02-03 04:05:06",
    "2001-02-03 04:05:06.789+02",
    "2001-02-03 04:05:06-03:30",
    "-infinity",
];
const INTERVALS: [&str; 4] = [
    "1 year 2 mons 3 days 04:05:06",
    "-04:05:06",
    "3 days",
    "00:00:00.123456",
];

fn decode_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode scalars");
    group.throughput(Throughput::Elements(4));
    group.bench_function("date", |b| {
        b.iter(|| {
            for input in DATES {
                decode_date(black_box(Some(input.as_bytes()))).unwrap();
            }
        })
    });
    group.bench_function("time", |b| {
        b.iter(|| {
            for input in TIMES {
                decode_time(black_box(Some(input.as_bytes()))).unwrap();
            }
        })
    });
    group.bench_function("interval", |b| {
        b.iter(|| {
            for input in INTERVALS {
                decode_interval(black_box(Some(input.as_bytes()))).unwrap();
            }
        })
    });
    group.finish();
}

fn decode_timestamps(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode timestamps");
    group.throughput(Throughput::Elements(4));
    let aware = DecodeContext::new();
    group.bench_function("with offsets", |b| {
        b.iter(|| {
            for input in TIMESTAMPS {
                aware
                    .decode_timestamp(black_box(Some(input.as_bytes())))
                    .unwrap();
            }
        })
    });
    let naive = DecodeContext::naive();
    group.bench_function("naive", |b| {
        b.iter(|| {
            for input in TIMESTAMPS {
                naive
                    .decode_timestamp(black_box(Some(input.as_bytes())))
                    .unwrap();
            }
        })
    });
    let in_seconds = |minutes: i32| -> Result<i32, InvalidTimezoneError> { Ok(minutes * 60) };
    group.bench_function("closure factory", |b| {
        b.iter(|| {
            for input in TIMESTAMPS {
                decode_timestamp(black_box(Some(input.as_bytes())), Some(&in_seconds)).unwrap();
            }
        })
    });
    group.finish();
}

criterion_group!(decode, decode_scalars, decode_timestamps);
criterion_main!(decode);
