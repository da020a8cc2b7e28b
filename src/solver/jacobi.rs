//! Parallel Jacobi iteration.
//!
//! Every row update of a sweep reads the previous sweep's full vector, so the
//! method is data-parallel with no ordering constraints among rows. The sweep
//! writes into a second buffer and the buffers change roles by ownership
//! transfer at the sweep boundary; updating in place would let later rows read
//! partially-updated values and silently turn the iteration into a different
//! method.

use crate::config::SolverOptions;
use crate::core::traits::{Indexing, InnerProduct, MatShape, MatVec, MatrixGet};
use crate::parallel;
use crate::report::{self, ConvergenceSink};
use crate::solver::RelaxationSolver;
use crate::system::LinearSystem;
use crate::utils::convergence::{Convergence, SolveStats, residual_norm};
use num_traits::Float;

pub struct JacobiSolver<'a, M, V, T> {
    system: &'a LinearSystem<M, V>,
    conv: Convergence<T>,
    report: Option<&'a mut dyn ConvergenceSink<T>>,
}

impl<'a, M, V, T: Float> JacobiSolver<'a, M, V, T> {
    pub fn new(system: &'a LinearSystem<M, V>, opts: &SolverOptions<T>) -> Self {
        Self {
            system,
            conv: Convergence {
                tol: opts.tol,
                max_sweeps: opts.max_sweeps,
            },
            report: None,
        }
    }

    /// Attach a convergence-report sink.
    pub fn with_report(mut self, sink: &'a mut dyn ConvergenceSink<T>) -> Self {
        self.report = Some(sink);
        self
    }
}

impl<'a, M, V, T> RelaxationSolver<V> for JacobiSolver<'a, M, V, T>
where
    M: MatVec<V> + MatrixGet<T> + MatShape + Sync,
    (): InnerProduct<V, Scalar = T>,
    V: AsRef<[T]> + From<Vec<T>> + Indexing,
    T: Float + From<f64> + Send + Sync,
{
    type Scalar = T;

    fn method(&self) -> &'static str {
        "jacobi"
    }

    fn solve(&mut self) -> (V, SolveStats<T>) {
        let n = self.system.order();
        let a = self.system.matrix();
        let b = self.system.rhs();
        let b_slice = b.as_ref();

        let mut x = vec![T::zero(); n];
        let mut x_next = vec![T::zero(); n];
        let mut residuals: Vec<T> = Vec::new();
        let mut stats = SolveStats {
            iterations: 0,
            final_residual: ().norm(b),
            converged: false,
        };

        for sweep in 1..=self.conv.max_sweeps {
            parallel::jacobi_sweep(a, b_slice, &x, &mut x_next);
            // full-sweep barrier has passed; x_next becomes the new iterate
            std::mem::swap(&mut x, &mut x_next);

            let res = residual_norm(a, &V::from(x.clone()), b);
            residuals.push(res);
            let (stop, s) = self.conv.check(res, sweep);
            stats = s;
            if stop {
                break;
            }
        }

        let method = self.method();
        report::emit(self.report.as_deref_mut(), method, None, &residuals);
        (V::from(x), stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;

    #[test]
    fn jacobi_solves_small_spd() {
        // Diagonally dominant system: [[4,1],[1,3]] x = [1,2]
        let mut a = Mat::<f64>::zeros(2, 2);
        a[(0, 0)] = 4.0;
        a[(0, 1)] = 1.0;
        a[(1, 0)] = 1.0;
        a[(1, 1)] = 3.0;
        let system = LinearSystem::new(a, vec![1.0, 2.0]).unwrap();
        let opts = SolverOptions::new(1e-10, 200);
        let mut solver = JacobiSolver::new(&system, &opts);
        let (x, stats) = solver.solve();
        assert!(stats.converged, "Jacobi did not converge");
        let expected = [1.0 / 11.0, 7.0 / 11.0];
        for (xi, ei) in x.iter().zip(expected.iter()) {
            assert!((xi - ei).abs() < 1e-8, "xi = {}, expected = {}", xi, ei);
        }
    }

    #[test]
    fn sweep_budget_of_zero_returns_the_initial_guess() {
        let mut a = Mat::<f64>::zeros(1, 1);
        a[(0, 0)] = 2.0;
        let system = LinearSystem::new(a, vec![4.0]).unwrap();
        let opts = SolverOptions::new(1e-10, 0);
        let mut solver = JacobiSolver::new(&system, &opts);
        let (x, stats) = solver.solve();
        assert_eq!(x, vec![0.0]);
        assert_eq!(stats.iterations, 0);
        assert!(!stats.converged);
    }
}
