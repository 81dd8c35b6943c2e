use criterion::{black_box, criterion_group, criterion_main, Criterion};
use git_oid::hex::{hex_decode, hex_to_string};
use git_oid::ObjectId;

fn hex_encode_decode(c: &mut Criterion) {
    let bytes = [
        0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x00, 0x11, 0x22,
        0x33, 0x44, 0x55, 0x66, 0x77,
    ];
    let hex = hex_to_string(&bytes);

    let mut group = c.benchmark_group("hex");

    group.bench_function("encode_20bytes", |b| {
        b.iter(|| ObjectId::from_raw(black_box(bytes)).hex_bytes())
    });

    group.bench_function("decode_40chars", |b| {
        b.iter(|| {
            let mut buf = [0u8; 20];
            hex_decode(black_box(hex.as_bytes()), &mut buf).unwrap();
            buf
        })
    });

    group.finish();
}

fn oid_comparison(c: &mut Criterion) {
    let a = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();
    let b = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80700").unwrap();

    let mut group = c.benchmark_group("oid");

    group.bench_function("eq", |b_iter| b_iter.iter(|| black_box(&a) == black_box(&b)));

    group.bench_function("cmp", |b_iter| {
        b_iter.iter(|| black_box(&a).cmp(black_box(&b)))
    });

    group.bench_function("prefix_eq_39", |b_iter| {
        b_iter.iter(|| black_box(&a).prefix_eq(black_box(&b), black_box(39)))
    });

    group.finish();
}

criterion_group!(benches, hex_encode_decode, oid_comparison);
criterion_main!(benches);
