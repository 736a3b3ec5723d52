use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grekeep::ether::EtherAddr;
use grekeep::probe::Probe;
use grekeep::{Classifier, Config, Decision, TunnelModes};

// 192.168.29.58 -> 192.168.29.160, UDP, not tunnel traffic.
static UDP_BYTES: [u8; 28] = [
    0x45, 0x00, 0x00, 0x1c, 0x5c, 0x65, 0x00, 0x00, 0x80, 0x11, 0x00, 0x00, 0xc0, 0xa8, 0x1d, 0x3a,
    0xc0, 0xa8, 0x1d, 0xa0, 0xeb, 0xd8, 0x00, 0xa1, 0x00, 0x08, 0x00, 0x00,
];

fn probe_bytes(probe: &Probe) -> Vec<u8> {
    let mut bytes = vec![0u8; probe.len()];
    probe.write(&mut bytes).unwrap();
    bytes
}

fn ipv4_keepalive() -> Vec<u8> {
    probe_bytes(&Probe::Ipv4 {
        local: [192, 168, 29, 58].into(),
        remote: [192, 168, 29, 160].into(),
    })
}

fn ipv6_keepalive(link: bool) -> Vec<u8> {
    probe_bytes(&Probe::Ipv6 {
        local: [0xfd00, 0, 0, 0, 0, 0, 0, 1].into(),
        remote: [0xfd00, 0, 0, 0, 0, 0, 0, 2].into(),
        marker: 0x86dd,
        link: link.then(|| (EtherAddr([0x02, 0, 0, 0, 0, 1]), EtherAddr([0x02, 0, 0, 0, 0, 2]))),
    })
}

pub fn b1(c: &mut Criterion) {
    let classifier = Classifier::default();
    c.bench_function("classify_udp", |b| {
        b.iter(|| {
            let decision = classifier.classify(black_box(&UDP_BYTES[..])).unwrap();
            assert!(matches!(decision, Decision::Pass(_)));
        })
    });
}

pub fn b2(c: &mut Criterion) {
    let classifier = Classifier::default();
    let bytes = ipv4_keepalive();
    c.bench_function("classify_gre4_keepalive", |b| {
        b.iter(|| {
            let decision = classifier.classify(black_box(&bytes[..])).unwrap();
            assert!(decision == Decision::Reflect { cutoff: 24 });
        })
    });
}

pub fn b3(c: &mut Criterion) {
    let mut config = Config::default();
    config.tunnels = TunnelModes::IP6GRE;
    let classifier = Classifier::new(config);
    let bytes = ipv6_keepalive(true);
    c.bench_function("classify_gre6_ether_keepalive", |b| {
        b.iter(|| {
            let decision = classifier.classify(black_box(&bytes[..])).unwrap();
            assert!(decision == Decision::Reflect { cutoff: 58 });
        })
    });
}

pub fn b4(c: &mut Criterion) {
    let mut config = Config::default();
    config.tunnels = TunnelModes {
        raw_ipv6: true,
        ..TunnelModes::default()
    };
    let classifier = Classifier::new(config);
    let bytes = ipv6_keepalive(false);
    c.bench_function("classify_gre6_raw_keepalive", |b| {
        b.iter(|| {
            let decision = classifier.classify(black_box(&bytes[..])).unwrap();
            assert!(decision == Decision::Reflect { cutoff: 44 });
        })
    });
}

criterion_group!(benches, b1, b2, b3, b4);
criterion_main!(benches);
