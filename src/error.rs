use thiserror::Error;

// Unified error type for relaxrb

#[derive(Error, Debug)]
pub enum RelaxError {
    #[error("matrix must be square, got {0}x{1}")]
    NonSquareMatrix(usize, usize),
    #[error("right-hand side has length {1}, expected {0}")]
    RhsLength(usize, usize),
    #[error("zero diagonal entry at row {0}")]
    ZeroPivot(usize),
    #[error("report error: {0}")]
    Report(String),
}
