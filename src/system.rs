//! The linear system A·x = b handed to a solver.

use crate::core::traits::{Indexing, MatShape, MatrixGet};
use crate::error::RelaxError;
use num_traits::Float;

/// Immutable holder of the coefficient matrix and right-hand side.
///
/// Shapes are validated once at construction; everything downstream may assume
/// a square matrix whose dimension matches the right-hand side. The diagonal is
/// *not* inspected here; see [`LinearSystem::check_diagonal`].
pub struct LinearSystem<M, V> {
    a: M,
    b: V,
}

impl<M, V> LinearSystem<M, V>
where
    M: MatShape,
    V: Indexing,
{
    /// Validate shapes and build the system.
    ///
    /// Fails with [`RelaxError::NonSquareMatrix`] or [`RelaxError::RhsLength`];
    /// these are the only fatal conditions in the crate.
    pub fn new(a: M, b: V) -> Result<Self, RelaxError> {
        let (rows, cols) = (a.nrows(), a.ncols());
        if rows != cols {
            return Err(RelaxError::NonSquareMatrix(rows, cols));
        }
        if b.nrows() != rows {
            return Err(RelaxError::RhsLength(rows, b.nrows()));
        }
        Ok(Self { a, b })
    }

    /// Dimension n of the system.
    pub fn order(&self) -> usize {
        self.a.nrows()
    }

    pub fn matrix(&self) -> &M {
        &self.a
    }

    pub fn rhs(&self) -> &V {
        &self.b
    }

    /// Opt-in guard against a singular update: scan for zero diagonal entries.
    ///
    /// The solvers never call this; a zero A[i][i] silently propagates inf/NaN
    /// through the iteration and shows up as a useless residual history.
    pub fn check_diagonal<T>(&self) -> Result<(), RelaxError>
    where
        M: MatrixGet<T>,
        T: Float,
    {
        for i in 0..self.order() {
            if self.a.get(i, i) == T::zero() {
                return Err(RelaxError::ZeroPivot(i));
            }
        }
        Ok(())
    }
}
