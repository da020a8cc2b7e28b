use criterion::{Criterion, black_box, criterion_group, criterion_main};
use faer::Mat;
use relaxrb::config::SolverOptions;
use relaxrb::solver::{GaussSeidelSolver, JacobiSolver, RelaxationSolver, SorSolver};
use relaxrb::system::LinearSystem;

fn dominant_system(n: usize) -> LinearSystem<Mat<f64>, Vec<f64>> {
    // off-diagonal entries in [-1, 1] under a diagonal of 2n: strictly dominant
    let a = Mat::from_fn(n, n, |i, j| {
        if i == j {
            2.0 * n as f64
        } else {
            ((i * n + j) as f64).sin()
        }
    });
    let b: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    LinearSystem::new(a, b).unwrap()
}

fn bench_relaxation_methods(c: &mut Criterion) {
    let n = 200;
    let system = dominant_system(n);
    let opts = SolverOptions::new(1e-6, 10_000).with_omega(1.1);

    c.bench_function("jacobi", |ben| {
        ben.iter(|| {
            let mut solver = JacobiSolver::new(black_box(&system), &opts);
            black_box(solver.solve())
        })
    });

    c.bench_function("gauss-seidel red-black", |ben| {
        ben.iter(|| {
            let mut solver = GaussSeidelSolver::new(black_box(&system), &opts);
            black_box(solver.solve())
        })
    });

    c.bench_function("sor red-black", |ben| {
        ben.iter(|| {
            let mut solver = SorSolver::new(black_box(&system), &opts);
            black_box(solver.solve())
        })
    });
}

criterion_group!(benches, bench_relaxation_methods);
criterion_main!(benches);
