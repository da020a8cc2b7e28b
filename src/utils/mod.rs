//! Shared utilities: convergence tracking and the red-black row partition.

pub mod convergence;
pub mod partition;

pub use convergence::{Convergence, SolveStats, residual_norm};
