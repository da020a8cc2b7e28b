//! Matrix module: dense matrix construction and access traits.

pub mod dense;
pub use dense::DenseMatrix;
