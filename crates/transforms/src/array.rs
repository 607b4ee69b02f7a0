//! Transforms over flat sequences.

use indexmap::IndexSet;
use sheetsync_core::{SyncError, SyncResult};
use std::hash::Hash;
use std::iter::Sum as IterSum;

/// Sum the elements of a slice.
#[must_use]
pub fn sum<T>(values: &[T]) -> T
where
    T: Copy + IterSum<T>,
{
    values.iter().copied().sum()
}

/// Pair elements of two slices positionally.
///
/// # Errors
///
/// Fails with a length mismatch when the slices differ in length. Silently
/// dropping the tail of the longer input would hide misaligned columns.
pub fn zip<A, B>(left: &[A], right: &[B]) -> SyncResult<Vec<(A, B)>>
where
    A: Clone,
    B: Clone,
{
    if left.len() != right.len() {
        return Err(SyncError::LengthMismatch {
            expected: left.len(),
            actual: right.len(),
        });
    }
    Ok(left
        .iter()
        .cloned()
        .zip(right.iter().cloned())
        .collect())
}

/// Remove duplicate elements, keeping the first occurrence of each.
#[must_use]
pub fn deduplicate<T>(values: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let set: IndexSet<T> = values.iter().cloned().collect();
    set.into_iter().collect()
}

/// Split a slice into consecutive chunks of at most `size` elements.
///
/// The final chunk may be shorter. An empty input yields no chunks.
///
/// # Errors
///
/// Fails if `size` is zero.
pub fn chunk<T>(values: &[T], size: usize) -> SyncResult<Vec<Vec<T>>>
where
    T: Clone,
{
    if size == 0 {
        return Err(SyncError::ChunkSize);
    }
    Ok(values.chunks(size).map(<[T]>::to_vec).collect())
}

/// Split a slice into the elements that satisfy `pred` and those that do not.
///
/// Relative order is preserved within each half.
#[must_use]
pub fn partition<T, F>(values: &[T], pred: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    values.iter().cloned().partition(|v| pred(v))
}
