//! Convergence reporting.
//!
//! A solver hands its residual history to a [`ConvergenceSink`] as the final
//! step of `solve()`. Sinks own all persistence and formatting concerns; a
//! failing sink is reported on stderr and never affects the solve result.

use crate::error::RelaxError;

/// Consumer of a solve's residual history.
pub trait ConvergenceSink<T> {
    /// Record one solve: the method label, the relaxation factor where the
    /// method has one (SOR), and the residual norm after each completed sweep
    /// (index = sweep number, starting at 0).
    fn record(&mut self, method: &str, omega: Option<T>, residuals: &[T]) -> Result<(), RelaxError>;
}

pub mod csv;
pub use csv::CsvReport;

pub mod memory;
pub use memory::{MemoryReport, RecordedRun};

/// Forward a residual history to an optional sink, swallowing sink failures.
pub(crate) fn emit<T>(
    sink: Option<&mut (dyn ConvergenceSink<T> + '_)>,
    method: &str,
    omega: Option<T>,
    residuals: &[T],
) {
    if let Some(sink) = sink {
        if let Err(err) = sink.record(method, omega, residuals) {
            eprintln!("WARNING: convergence report for {method} failed: {err}");
        }
    }
}
