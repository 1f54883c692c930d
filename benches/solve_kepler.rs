use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use perihelion::kepler::{solve_fixed_point, solve_newton};

/// Pre-generate (e, M) pairs so the timed section only runs the solver
fn make_cases(rng: &mut StdRng, samples: usize, e_max: f64) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| {
            let e = rng.gen_range(0.0..=e_max);
            let m = rng.gen_range(0.0..360.0);
            (e, m)
        })
        .collect()
}

/// Planetary regime: e <= 0.1
fn bench_fixed_point(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xCAFED00D);
    let samples = 1_000usize;

    c.bench_function("solve_kepler/fixed_point_e<=0.1", |b| {
        b.iter_batched(
            || make_cases(&mut rng, samples, 0.1),
            |cases| {
                for (e, m) in cases {
                    let sol = solve_fixed_point(black_box(e), black_box(m)).unwrap();
                    black_box(sol.eccentric_anomaly);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_newton(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xCAFED00D);
    let samples = 1_000usize;

    c.bench_function("solve_kepler/newton_e<=0.1", |b| {
        b.iter_batched(
            || make_cases(&mut rng, samples, 0.1),
            |cases| {
                for (e, m) in cases {
                    let sol = solve_newton(black_box(e), black_box(m)).unwrap();
                    black_box(sol.eccentric_anomaly);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_fixed_point, bench_newton);
criterion_main!(benches);
