use ecc32::curve::params::SECP256R1;
use ecc32::group::Point;
use ecc32::scalar;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_scalar_mult(c: &mut Criterion) {
    let (gx, gy) = SECP256R1.g;
    let g = Point::from_affine(gx, gy);
    let d = [0x1234_5678, 0x9abc_def0, 0x0f0e_0d0c, 0x0b0a_0908, 0x0706_0504, 0x0302_0100, 0xdead_beef, 0x0000_0001];

    c.bench_function("scalar mult, secp256r1", |b| {
        b.iter(|| scalar::mult(&SECP256R1, black_box(g), black_box(&d)))
    });
}

criterion_group!(benches, bench_scalar_mult);
criterion_main!(benches);
