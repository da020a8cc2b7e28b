//! CSV persistence of residual histories, one file per method.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::RelaxError;
use crate::report::ConvergenceSink;

/// Writes each recorded history to `<dir>/<method>_convergence.csv`, in the
/// layout the usual iteration-vs-residual semilog plot expects. For SOR runs
/// the relaxation factor is folded into the file name, so histories for
/// several ω values can sit side by side.
pub struct CsvReport {
    dir: PathBuf,
}

impl CsvReport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl<T: Display> ConvergenceSink<T> for CsvReport {
    fn record(&mut self, method: &str, omega: Option<T>, residuals: &[T]) -> Result<(), RelaxError> {
        if residuals.is_empty() {
            eprintln!("WARNING: no residuals recorded for {method}");
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|e| RelaxError::Report(e.to_string()))?;
        let name = match omega {
            Some(w) => format!("{method}_w{w}_convergence.csv"),
            None => format!("{method}_convergence.csv"),
        };
        let path = self.dir.join(name);
        let file = File::create(&path).map_err(|e| RelaxError::Report(e.to_string()))?;
        let mut out = BufWriter::new(file);
        writeln!(out, "Iteration,Residual").map_err(|e| RelaxError::Report(e.to_string()))?;
        for (i, res) in residuals.iter().enumerate() {
            writeln!(out, "{i},{res}").map_err(|e| RelaxError::Report(e.to_string()))?;
        }
        Ok(())
    }
}
