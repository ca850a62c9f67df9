use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mulcmp::bench::random_operand;
use mulcmp::divide_conquer::divide_and_conquer_mul;
use mulcmp::karatsuba::karatsuba_mul;
use mulcmp::schoolbook_mul::schoolbook_mul;
use mulcmp::split::{split_at, split_point};
use mulcmp::Algorithm;
use rand::SeedableRng;


fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_operand(&mut rng, 1000);
    let b = random_operand(&mut rng, 1000);
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(&a, &b))
    });
}
fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_operand(&mut rng, 1000);
    let b = random_operand(&mut rng, 1000);
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b));
    });
}
fn bench_karatsuba_mul_10k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_operand(&mut rng, 10000);
    let b = random_operand(&mut rng, 10000);
    c.bench_function("karatsuba_mul_10k", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b));
    });
}
fn bench_divide_and_conquer_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_operand(&mut rng, 1000);
    let b = random_operand(&mut rng, 1000);
    c.bench_function("divide_and_conquer_mul_1k", |bench| {
        bench.iter(|| divide_and_conquer_mul(&a, &b));
    });
}
// Same operands for every algorithm at each size, like the comparison driver.
fn bench_compare(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut group = c.benchmark_group("compare");
    for &digits in [16, 64, 256].iter() {
        let a = random_operand(&mut rng, digits);
        let b = random_operand(&mut rng, digits);
        for &algorithm in Algorithm::ALL.iter() {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), digits),
                &(&a, &b),
                |bench, &(a, b)| bench.iter(|| algorithm.multiply(a, b)),
            );
        }
    }
    group.finish();
}
fn bench_add_assign(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut a = random_operand(&mut rng, 1000);
    let b = random_operand(&mut rng, 1000);
    c.bench_function("add_assign", |bench| {
        bench.iter(|| a += &b);
    });
}
fn bench_split(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_operand(&mut rng, 1000);
    let b = random_operand(&mut rng, 1000);
    c.bench_function("split_1k", |bench| {
        bench.iter(|| split_at(black_box(&a), split_point(&a, &b)));
    });
}

fn configured() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = configured();
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_mul,
        bench_karatsuba_mul_10k,
        bench_divide_and_conquer_mul,
        bench_compare,
        bench_add_assign,
        bench_split,
);
criterion_main!(benches);
