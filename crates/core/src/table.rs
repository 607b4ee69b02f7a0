//! Row and rectangle helpers shared by the transform and store crates.

use crate::error::{SyncError, SyncResult};
use crate::value::CellValue;

/// A single row of cells.
pub type Row = Vec<CellValue>;

/// Width of a rectangular block of rows.
///
/// # Errors
///
/// Fails if `rows` is empty or if any row's length differs from the first.
pub fn rectangular_width<T>(rows: &[Vec<T>]) -> SyncResult<usize> {
    let Some(first) = rows.first() else {
        return Err(SyncError::EmptyRows);
    };
    let width = first.len();
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != width {
            return Err(SyncError::RaggedRow {
                row: i,
                expected: width,
                actual: row.len(),
            });
        }
    }
    Ok(width)
}
