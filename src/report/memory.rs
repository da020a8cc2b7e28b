//! In-memory sink, for tests and programmatic inspection.

use crate::error::RelaxError;
use crate::report::ConvergenceSink;

/// One recorded solve.
#[derive(Clone, Debug)]
pub struct RecordedRun<T> {
    pub method: String,
    pub omega: Option<T>,
    pub residuals: Vec<T>,
}

/// Keeps every recorded history in order of arrival.
#[derive(Default)]
pub struct MemoryReport<T> {
    pub runs: Vec<RecordedRun<T>>,
}

impl<T> MemoryReport<T> {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Residual history of the most recent run.
    pub fn last_residuals(&self) -> Option<&[T]> {
        self.runs.last().map(|run| run.residuals.as_slice())
    }
}

impl<T: Clone> ConvergenceSink<T> for MemoryReport<T> {
    fn record(&mut self, method: &str, omega: Option<T>, residuals: &[T]) -> Result<(), RelaxError> {
        self.runs.push(RecordedRun {
            method: method.to_string(),
            omega,
            residuals: residuals.to_vec(),
        });
        Ok(())
    }
}
