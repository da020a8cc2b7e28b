//! Parallel successive over-relaxation (SOR) with red-black ordering.
//!
//! Same two-phase red/black sweep as Gauss-Seidel, with each update blended
//! against the previous value: x[i] ← (1 − ω)·x[i] + ω·(Gauss-Seidel
//! estimate). ω is taken from the solver options and is not range-checked;
//! ω = 1 reduces exactly to Gauss-Seidel, ω ∈ (1, 2) can converge faster or
//! diverge, and a divergent choice is observable only as a growing residual
//! history.

use crate::config::SolverOptions;
use crate::core::traits::{Indexing, InnerProduct, MatShape, MatVec, MatrixGet};
use crate::parallel;
use crate::report::{self, ConvergenceSink};
use crate::solver::RelaxationSolver;
use crate::system::LinearSystem;
use crate::utils::convergence::{Convergence, SolveStats, residual_norm};
use crate::utils::partition::parity_blocks;
use num_traits::Float;

pub struct SorSolver<'a, M, V, T> {
    system: &'a LinearSystem<M, V>,
    conv: Convergence<T>,
    omega: T,
    report: Option<&'a mut dyn ConvergenceSink<T>>,
}

impl<'a, M, V, T: Float> SorSolver<'a, M, V, T> {
    pub fn new(system: &'a LinearSystem<M, V>, opts: &SolverOptions<T>) -> Self {
        Self {
            system,
            conv: Convergence {
                tol: opts.tol,
                max_sweeps: opts.max_sweeps,
            },
            omega: opts.omega,
            report: None,
        }
    }

    /// Attach a convergence-report sink.
    pub fn with_report(mut self, sink: &'a mut dyn ConvergenceSink<T>) -> Self {
        self.report = Some(sink);
        self
    }

    pub fn omega(&self) -> T {
        self.omega
    }
}

impl<'a, M, V, T> RelaxationSolver<V> for SorSolver<'a, M, V, T>
where
    M: MatVec<V> + MatrixGet<T> + MatShape + Sync,
    (): InnerProduct<V, Scalar = T>,
    V: AsRef<[T]> + From<Vec<T>> + Indexing,
    T: Float + From<f64> + Send + Sync,
{
    type Scalar = T;

    fn method(&self) -> &'static str {
        "sor"
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
            parallel::color_sweep_relaxed(a, b_slice, &mut x, &red, self.omega);
            parallel::color_sweep_relaxed(a, b_slice, &mut x, &black, self.omega);

            let res = residual_norm(a, &V::from(x.clone()), b);
            residuals.push(res);
            let (stop, s) = self.conv.check(res, sweep);
            stats = s;
            if stop {
                break;
            }
        }

        let method = self.method();
        let omega = self.omega;
        report::emit(self.report.as_deref_mut(), method, Some(omega), &residuals);
        (V::from(x), stats)
    }
}
