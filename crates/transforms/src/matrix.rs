//! Transforms over rectangular row data.

use sheetsync_core::{rectangular_width, SyncResult};
use std::ops::AddAssign;

/// Sum a rectangular block of rows column by column.
///
/// Returns one total per column.
///
/// # Errors
///
/// Fails if `rows` is empty or ragged.
pub fn column_wise_sum<T>(rows: &[Vec<T>]) -> SyncResult<Vec<T>>
where
    T: Copy + Default + AddAssign,
{
    let width = rectangular_width(rows)?;
    let mut totals = vec![T::default(); width];
    for row in rows {
        for (total, value) in totals.iter_mut().zip(row) {
            *total += *value;
        }
    }
    Ok(totals)
}
