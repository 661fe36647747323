use std::hint::black_box;
use std::str::FromStr;

use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;

const BIG_X: &str = "57896044618658097711785492504343953926634992332820282019728792003956564819967";
const BIG_Y: &str = "-431294739547329532759843795873498573495873495834759834758349";

fn bench_addition(c: &mut Criterion) {
    c.bench_function("num_bigint_addition", |b| {
        let x = BigInt::from_str(BIG_X).unwrap();
        let y = BigInt::from_str(BIG_Y).unwrap();
        b.iter(|| black_box(black_box(&x) + black_box(&y)));
    });
}

fn bench_subtraction(c: &mut Criterion) {
    c.bench_function("num_bigint_subtraction", |b| {
        let x = BigInt::from_str(BIG_X).unwrap();
        let y = BigInt::from_str(BIG_Y).unwrap();
        b.iter(|| black_box(black_box(&x) - black_box(&y)));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("num_bigint_multiplication", |b| {
        let x = BigInt::from_str("340282366920938463463374607431768211455").unwrap();
        let y = BigInt::from_str("-170141183460469231731687303715884105727").unwrap();
        b.iter(|| black_box(black_box(&x) * black_box(&y)));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("num_bigint_division", |b| {
        let x = BigInt::from_str(BIG_X).unwrap();
        let y = BigInt::from_str(BIG_Y).unwrap();
        b.iter(|| black_box(black_box(&x) / black_box(&y)));
    });
}

fn bench_remainder(c: &mut Criterion) {
    c.bench_function("num_bigint_remainder", |b| {
        let x = BigInt::from_str(BIG_X).unwrap();
        let y = BigInt::from_str(BIG_Y).unwrap();
        b.iter(|| black_box(black_box(&x) % black_box(&y)));
    });
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("num_bigint_parsing", |b| {
        b.iter(|| black_box(BigInt::from_str(black_box(BIG_X)).unwrap()));
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("num_bigint_formatting", |b| {
        let x = BigInt::from_str(BIG_X).unwrap();
        b.iter(|| black_box(format!("{}", x)));
    });
}

fn bench_comparison(c: &mut Criterion) {
    c.bench_function("num_bigint_comparison", |b| {
        let x = BigInt::from_str(BIG_X).unwrap();
        let y = BigInt::from_str(BIG_Y).unwrap();
        b.iter(|| black_box(black_box(&x) < black_box(&y)));
    });
}

fn bench_shift_left(c: &mut Criterion) {
    c.bench_function("num_bigint_shift_left", |b| {
        let x = BigInt::from_str(BIG_Y).unwrap();
        b.iter(|| black_box(black_box(&x) << black_box(100u32)));
    });
}

fn bench_sqrt(c: &mut Criterion) {
    c.bench_function("num_bigint_sqrt", |b| {
        let x = BigInt::from_str(BIG_X).unwrap();
        b.iter(|| black_box(black_box(&x).sqrt()));
    });
}

fn bench_sum(c: &mut Criterion) {
    c.bench_function("num_bigint_sum_1000_values", |b| {
        let values: Vec<BigInt> = (0..1000i64).map(|i| BigInt::from(i * i - 500)).collect();
        b.iter(|| black_box(values.iter().sum::<BigInt>()));
    });
}

criterion_group!(
    benches,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_division,
    bench_remainder,
    bench_parsing,
    bench_formatting,
    bench_comparison,
    bench_shift_left,
    bench_sqrt,
    bench_sum,
);

criterion_main!(benches);
