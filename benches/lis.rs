use criterion::{criterion_group, criterion_main, Criterion};
use lislab::bench::random_sequence;
use lislab::{lis_dp, lis_patience};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// Same shape as the `compare` subcommand: shared inputs per size, with the
// quadratic solver capped at n = 2000.
fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis");
    for &len in &[100usize, 1_000, 10_000] {
        let mut rng = ChaCha20Rng::seed_from_u64(0xC0FFEE);
        let values = random_sequence(&mut rng, len, 10_000);

        group.bench_function(format!("patience_{len}"), |b| {
            b.iter(|| lis_patience(criterion::black_box(&values)))
        });
        if len <= 2_000 {
            group.bench_function(format!("dp_{len}"), |b| {
                b.iter(|| lis_dp(criterion::black_box(&values)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lis);
criterion_main!(benches);
