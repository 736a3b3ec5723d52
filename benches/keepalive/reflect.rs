use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use grekeep::probe::Probe;
use grekeep::{Classifier, CursorMut, Verdict};

fn keepalive() -> Vec<u8> {
    let probe = Probe::Ipv4 {
        local: [10, 0, 0, 1].into(),
        remote: [10, 0, 0, 2].into(),
    };
    let mut bytes = vec![0u8; probe.len()];
    probe.write(&mut bytes).unwrap();
    bytes
}

pub fn b1(c: &mut Criterion) {
    let classifier = Classifier::default();
    let bytes = keepalive();
    c.bench_function("reflect_cursor_mut", |b| {
        b.iter_batched(
            || bytes.clone(),
            |mut pkt| {
                let mut buf = CursorMut::new(black_box(&mut pkt[..]));
                assert!(classifier.process(&mut buf) == Verdict::Transmit);
            },
            BatchSize::SmallInput,
        )
    });
}

pub fn b2(c: &mut Criterion) {
    let classifier = Classifier::default();
    let bytes = keepalive();
    c.bench_function("reflect_bytes_mut", |b| {
        b.iter_batched(
            || BytesMut::from(&bytes[..]),
            |mut buf| {
                assert!(classifier.process(black_box(&mut buf)) == Verdict::Transmit);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, b1, b2);
criterion_main!(benches);
