//! Shared-memory data-parallel sweep kernels.
//!
//! All three relaxation methods are built from the same per-row update
//! formula; the kernels here differ only in read/write discipline:
//!
//! - [`jacobi_sweep`] writes every row into a disjoint output buffer, so each
//!   row reads the unmodified previous-sweep snapshot.
//! - [`color_sweep`] / [`color_sweep_relaxed`] update the rows of one
//!   red-black color in place. Updates are computed from the vector as it
//!   stands on phase entry and written back only after every row of the color
//!   has been computed; that join is the half-sweep barrier, and it makes the
//!   processing order within a color irrelevant.
//!
//! With the `rayon` feature (default) rows are processed by the global worker
//! pool; without it the kernels degrade to the equivalent serial loops.

use crate::core::traits::MatrixGet;
use num_traits::Float;

/// Size the global worker pool to the machine's core count.
///
/// First configuration wins; if the application already built a global pool
/// this is a no-op.
#[cfg(feature = "rayon")]
pub fn init_threads() {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .build_global()
        .ok();
}

/// One relaxation step for row `i`: (b[i] − Σ_{j≠i} A[i][j]·x[j]) / A[i][i].
pub fn row_update<M, T>(a: &M, b: &[T], x: &[T], i: usize) -> T
where
    M: MatrixGet<T>,
    T: Float,
{
    let mut sigma = T::zero();
    for (j, &xj) in x.iter().enumerate() {
        if j != i {
            sigma = sigma + a.get(i, j) * xj;
        }
    }
    (b[i] - sigma) / a.get(i, i)
}

/// Full Jacobi sweep: every row of `x_new` computed from the `x_old` snapshot.
///
/// The two buffers must not alias; rows are mutually independent and the
/// caller swaps the buffers once the sweep has completed.
pub fn jacobi_sweep<M, T>(a: &M, b: &[T], x_old: &[T], x_new: &mut [T])
where
    M: MatrixGet<T> + Sync,
    T: Float + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x_new
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, xi)| *xi = row_update(a, b, x_old, i));
    }
    #[cfg(not(feature = "rayon"))]
    for (i, xi) in x_new.iter_mut().enumerate() {
        *xi = row_update(a, b, x_old, i);
    }
}

/// Half sweep: update the rows of one color in place (Gauss-Seidel formula).
///
/// Every update reads the vector as it stands on entry to the phase; the
/// writes land together after all rows of the color have been computed.
pub fn color_sweep<M, T>(a: &M, b: &[T], x: &mut [T], rows: &[usize])
where
    M: MatrixGet<T> + Sync,
    T: Float + Send + Sync,
{
    let snapshot: &[T] = x;
    #[cfg(feature = "rayon")]
    let updates: Vec<T> = {
        use rayon::prelude::*;
        rows.par_iter().map(|&i| row_update(a, b, snapshot, i)).collect()
    };
    #[cfg(not(feature = "rayon"))]
    let updates: Vec<T> = rows.iter().map(|&i| row_update(a, b, snapshot, i)).collect();

    for (&i, v) in rows.iter().zip(updates) {
        x[i] = v;
    }
}

/// Half sweep with relaxation: x[i] ← (1 − ω)·x[i] + ω·(Gauss-Seidel estimate).
///
/// Same phase discipline as [`color_sweep`]; ω = 1 reduces to it exactly.
pub fn color_sweep_relaxed<M, T>(a: &M, b: &[T], x: &mut [T], rows: &[usize], omega: T)
where
    M: MatrixGet<T> + Sync,
    T: Float + Send + Sync,
{
    let snapshot: &[T] = x;
    #[cfg(feature = "rayon")]
    let updates: Vec<T> = {
        use rayon::prelude::*;
        rows.par_iter()
            .map(|&i| (T::one() - omega) * snapshot[i] + omega * row_update(a, b, snapshot, i))
            .collect()
    };
    #[cfg(not(feature = "rayon"))]
    let updates: Vec<T> = rows
        .iter()
        .map(|&i| (T::one() - omega) * snapshot[i] + omega * row_update(a, b, snapshot, i))
        .collect();

    for (&i, v) in rows.iter().zip(updates) {
        x[i] = v;
    }
}
