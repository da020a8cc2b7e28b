//! Parallel Gauss-Seidel iteration with red-black ordering.
//!
//! Classic Gauss-Seidel updates rows strictly in sequence, each row reading
//! its predecessors' fresh values. Partitioning the rows by parity recovers
//! parallelism: one sweep updates all red (even) rows, then all black (odd)
//! rows, with a hard barrier in between. Red rows read the previous sweep's
//! values throughout; black rows read the just-updated reds and the
//! about-to-be-overwritten blacks. Skipping the barrier would reintroduce the
//! Jacobi-style race and lose the Gauss-Seidel convergence characteristics.

use crate::config::SolverOptions;
use crate::core::traits::{Indexing, InnerProduct, MatShape, MatVec, MatrixGet};
use crate::parallel;
use crate::report::{self, ConvergenceSink};
use crate::solver::RelaxationSolver;
use crate::system::LinearSystem;
use crate::utils::convergence::{Convergence, SolveStats, residual_norm};
use crate::utils::partition::parity_blocks;
use num_traits::Float;

pub struct GaussSeidelSolver<'a, M, V, T> {
    system: &'a LinearSystem<M, V>,
    conv: Convergence<T>,
    report: Option<&'a mut dyn ConvergenceSink<T>>,
}

impl<'a, M, V, T: Float> GaussSeidelSolver<'a, M, V, T> {
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

impl<'a, M, V, T> RelaxationSolver<V> for GaussSeidelSolver<'a, M, V, T>
where
    M: MatVec<V> + MatrixGet<T> + MatShape + Sync,
    (): InnerProduct<V, Scalar = T>,
    V: AsRef<[T]> + From<Vec<T>> + Indexing,
    T: Float + From<f64> + Send + Sync,
{
    type Scalar = T;

    fn method(&self) -> &'static str {
        "gauss-seidel"
    }

    fn solve(&mut self) -> (V, SolveStats<T>) {
        let n = self.system.order();
        let a = self.system.matrix();
        let b = self.system.rhs();
        let b_slice = b.as_ref();
        let (red, black) = parity_blocks(n);

        let mut x = vec![T::zero(); n];
        let mut residuals: Vec<T> = Vec::new();
        let mut stats = SolveStats {
            iterations: 0,
            final_residual: ().norm(b),
            converged: false,
        };

        for sweep in 1..=self.conv.max_sweeps {
            // red phase, then black phase; the join inside color_sweep is the
            // barrier that makes red writes visible before any black update
            parallel::color_sweep(a, b_slice, &mut x, &red);
            parallel::color_sweep(a, b_slice, &mut x, &black);

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
