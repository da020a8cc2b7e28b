//! Iteration controls for the relaxation solvers.
//!
//! This module provides the `SolverOptions` struct, which carries the absolute
//! residual tolerance, the hard cap on sweeps, and the relaxation factor ω.
//! The relaxation factor is read by the SOR solver only; Jacobi and
//! Gauss-Seidel ignore it.

use num_traits::Float;

/// Tolerance, sweep budget & relaxation factor.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions<T> {
    /// Absolute residual tolerance: iteration stops once ‖A·x − b‖₂ < tol.
    pub tol: T,

    /// Hard cap on the number of sweeps.
    pub max_sweeps: usize,

    /// Relaxation factor ω for SOR, conventionally in (0, 2); ω = 1 reduces
    /// SOR to Gauss-Seidel. Not range-checked: an ill-chosen ω shows up as a
    /// growing residual history, nothing more.
    pub omega: T,
}

impl<T: Float> SolverOptions<T> {
    /// Options with the given tolerance and sweep budget, ω = 1.
    pub fn new(tol: T, max_sweeps: usize) -> Self {
        Self {
            tol,
            max_sweeps,
            omega: T::one(),
        }
    }

    /// Set the relaxation factor for SOR.
    pub fn with_omega(mut self, omega: T) -> Self {
        self.omega = omega;
        self
    }
}
