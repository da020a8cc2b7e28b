//! Convergence tracking & tolerance checks for the relaxation solvers.

use crate::core::traits::{InnerProduct, MatVec};

/// Stopping criteria & stats.
pub struct Convergence<T> {
    pub tol: T,
    pub max_sweeps: usize,
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (should_stop, stats) given the residual norm after sweep `sweep`.
    ///
    /// The comparison is absolute: the iteration has converged once
    /// `res_norm < tol`. Reaching the sweep budget stops the iteration without
    /// marking it converged.
    pub fn check(&self, res_norm: T, sweep: usize) -> (bool, SolveStats<T>) {
        let converged = res_norm < self.tol;
        (
            converged || sweep >= self.max_sweeps,
            SolveStats {
                iterations: sweep,
                final_residual: res_norm,
                converged,
            },
        )
    }
}

/// Euclidean norm of the residual r = A·x − b.
pub fn residual_norm<M, V, T>(a: &M, x: &V, b: &V) -> T
where
    M: MatVec<V>,
    (): InnerProduct<V, Scalar = T>,
    V: AsRef<[T]> + From<Vec<T>>,
    T: num_traits::Float + From<f64>,
{
    let n = b.as_ref().len();
    let mut ax = V::from(vec![T::zero(); n]);
    a.matvec(x, &mut ax);
    let r: Vec<T> = ax
        .as_ref()
        .iter()
        .zip(b.as_ref())
        .map(|(&axi, &bi)| axi - bi)
        .collect();
    ().norm(&V::from(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_exhaustion_is_not_convergence() {
        let conv = Convergence { tol: 1e-8, max_sweeps: 10 };
        let (stop, stats) = conv.check(1.0, 10);
        assert!(stop);
        assert!(!stats.converged);
        assert_eq!(stats.iterations, 10);
    }

    #[test]
    fn tolerance_hit_stops_early() {
        let conv = Convergence { tol: 1e-8, max_sweeps: 10 };
        let (stop, stats) = conv.check(1e-9, 3);
        assert!(stop);
        assert!(stats.converged);
        assert_eq!(stats.iterations, 3);
    }
}
