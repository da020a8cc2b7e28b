//! Solve one random diagonally dominant system with all three relaxation
//! methods and persist their residual histories for plotting.

use std::time::Instant;

use faer::Mat;
use rand::Rng;
use relaxrb::config::SolverOptions;
use relaxrb::report::CsvReport;
use relaxrb::solver::{GaussSeidelSolver, JacobiSolver, RelaxationSolver, SorSolver};
use relaxrb::system::LinearSystem;

fn run(mut solver: impl RelaxationSolver<Vec<f64>, Scalar = f64>) {
    let label = solver.method();
    let start = Instant::now();
    let (_x, stats) = solver.solve();
    println!(
        "{label}: {} sweeps, final residual {:.3e}, converged: {}, took {} ms",
        stats.iterations,
        stats.final_residual,
        stats.converged,
        start.elapsed().as_millis()
    );
}

fn main() {
    #[cfg(feature = "rayon")]
    relaxrb::parallel::init_threads();

    // A = MᵀM + n·I for random M: symmetric, positive definite, dominant diagonal
    let n = 200;
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let m = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    let m_t = m.transpose();
    let mut a = &m_t * &m;
    for i in 0..n {
        a[(i, i)] = a[(i, i)] + n as f64;
    }
    let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let system = LinearSystem::new(a, b).unwrap();
    let opts = SolverOptions::new(1e-6, 10_000).with_omega(1.7);
    let mut report = CsvReport::new("Results");

    run(JacobiSolver::new(&system, &opts).with_report(&mut report));
    run(GaussSeidelSolver::new(&system, &opts).with_report(&mut report));
    run(SorSolver::new(&system, &opts).with_report(&mut report));

    println!("residual histories written to Results/");
}
