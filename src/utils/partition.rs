//! Red-black partition of row indices by parity.
//!
//! Gauss-Seidel and SOR regain parallelism by updating the even-indexed (red)
//! rows and the odd-indexed (black) rows in two separate phases. The partition
//! is fixed and non-adaptive: the two index blocks are materialized once per
//! solve and each phase walks exactly one of them.

/// Row indices split into (red, black) = (even, odd) blocks.
pub fn parity_blocks(n: usize) -> (Vec<usize>, Vec<usize>) {
    let red = (0..n).step_by(2).collect();
    let black = (1..n).step_by(2).collect();
    (red, black)
}
