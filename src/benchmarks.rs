extern crate rand;
extern crate rand_chacha;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mulrace::operand::random_operand;
use mulrace::{run, Algorithm, BigUint};
use rand::SeedableRng;

fn operand_pair(digits: usize) -> (BigUint, BigUint) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_operand(&mut rng, digits).unwrap();
    let b = random_operand(&mut rng, digits).unwrap();
    (a, b)
}
fn bench_algorithm(c: &mut Criterion, algorithm: Algorithm, lengths: &[usize]) {
    let mut group = c.benchmark_group(algorithm.to_string());
    for &digits in lengths {
        let (a, b) = operand_pair(digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| run(algorithm, black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}
fn bench_karatsuba(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Karatsuba, &[10, 50, 100, 200, 500, 1000]);
}
fn bench_divide_and_conquer(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::DivideAndConquer, &[10, 50, 100, 200, 500]);
}
fn bench_digit_count(c: &mut Criterion) {
    let (a, _) = operand_pair(5000);
    c.bench_function("digit_count_5k", |bench| {
        bench.iter(|| mulrace::digits::digit_count(black_box(&a)))
    });
}

fn quick() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = quick();
    targets =
        bench_karatsuba,
        bench_divide_and_conquer,
        bench_digit_count,
);
criterion_main!(benches);
