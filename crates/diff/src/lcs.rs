//! Longest common subsequence of two token sequences.
//!
//! The default implementation fills the classic `(m+1)×(n+1)` table and walks
//! it back from the bottom-right corner. When neither neighbour wins the walk
//! steps up, consuming from the original sequence first. That rule decides
//! which of several equally long subsequences is returned, and every
//! segmentation produced by this crate depends on it.

use std::hash::Hash;
use std::time::Instant;

use similar::{Algorithm, DiffOp};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Algorithm used to align the two token sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffAlgorithm {
    /// Dynamic programming table, quadratic in time and memory
    #[default]
    Lcs,

    /// Myers' O(ND) algorithm from `similar`. Finds a subsequence of the same
    /// length, but may pick a different one than [`DiffAlgorithm::Lcs`].
    Myers,
}

/// Number of cells the LCS table needs for sequences of these lengths
pub fn table_cells(old_len: usize, new_len: usize) -> usize {
    old_len.saturating_mul(new_len)
}

/// Compute one longest common subsequence of `old` and `new`
pub fn longest_common_subsequence<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<T> {
    let m = old.len();
    let n = new.len();
    if m == 0 || n == 0 {
        return Vec::new();
    }

    // Row-major (m+1)×(n+1) table
    let width = n + 1;
    let mut dp = vec![0usize; (m + 1) * width];

    for i in 1..=m {
        for j in 1..=n {
            dp[i * width + j] = if old[i - 1] == new[j - 1] {
                dp[(i - 1) * width + (j - 1)] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
            };
        }
    }

    let mut result = Vec::with_capacity(dp[m * width + n]);
    let mut i = m;
    let mut j = n;

    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            result.push(old[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[(i - 1) * width + j] >= dp[i * width + (j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    result.reverse();
    result
}

/// Compute a common subsequence with Myers' algorithm.
///
/// Without a deadline the result is as long as [`longest_common_subsequence`].
/// Once the deadline passes `similar` falls back to a coarser alignment.
pub fn myers_common_subsequence<T: Eq + Hash + Ord + Clone>(
    old: &[T],
    new: &[T],
    deadline: Option<Instant>,
) -> Vec<T> {
    let ops = similar::capture_diff_slices_deadline(Algorithm::Myers, old, new, deadline);

    let mut result = Vec::new();
    for op in ops {
        if let DiffOp::Equal { old_index, len, .. } = op {
            result.extend_from_slice(&old[old_index..old_index + len]);
        }
    }
    result
}
