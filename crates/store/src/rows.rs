//! Truncate, append, and replace operations over a tabular store.

use crate::store::SheetStore;
use sheetsync_core::{rectangular_width, CellValue, Row, SyncError, SyncResult};

/// True when any cell of the row stringifies to something.
#[must_use]
pub fn is_non_empty_row(row: &[CellValue]) -> bool {
    row.iter().any(|cell| !cell.is_blank())
}

/// Read the used range and keep only non-empty rows, in order.
///
/// # Errors
///
/// Returns an error if the underlying read fails.
pub fn non_empty_rows<S>(store: &S) -> SyncResult<Vec<Row>>
where
    S: SheetStore + ?Sized,
{
    let rows = store.data_range()?;
    Ok(rows.into_iter().filter(|r| is_non_empty_row(r)).collect())
}

/// Clear every row below the header band.
///
/// A no-op when nothing lies below the band. The header rows are never
/// touched.
///
/// # Errors
///
/// Returns an error if the underlying clear fails.
pub fn truncate_rows<S>(store: &mut S, header_rows: usize) -> SyncResult<()>
where
    S: SheetStore + ?Sized,
{
    let last_row = store.last_row();
    if last_row <= header_rows {
        return Ok(());
    }
    store.clear_range(
        header_rows + 1,
        1,
        last_row - header_rows,
        store.last_column(),
    )
}

/// Write a rectangular block of rows starting at `start_row`, column 1.
///
/// # Errors
///
/// Fails if `start_row` is 0 or if `rows` is empty or ragged. A block of
/// zero-width rows counts as empty. Nothing is written on failure.
pub fn append_rows<S>(store: &mut S, rows: &[Row], start_row: usize) -> SyncResult<()>
where
    S: SheetStore + ?Sized,
{
    if start_row == 0 {
        return Err(SyncError::InvalidStartRow);
    }
    if rectangular_width(rows)? == 0 {
        return Err(SyncError::EmptyRows);
    }
    store.write_range(start_row, 1, rows)
}

/// Replace everything below the header band with `rows`.
///
/// Truncates below the band, then writes the block at `header_rows + 1`.
/// `rows` is validated up front so bad input cannot empty a sheet. The two
/// store steps are not atomic: a store failure between them leaves the
/// header band intact and the old data rows gone.
///
/// # Errors
///
/// Fails if `rows` is empty or ragged, or if a store operation fails. A
/// block of zero-width rows counts as empty.
pub fn write_rows<S>(store: &mut S, rows: &[Row], header_rows: usize) -> SyncResult<()>
where
    S: SheetStore + ?Sized,
{
    if rectangular_width(rows)? == 0 {
        return Err(SyncError::EmptyRows);
    }
    truncate_rows(store, header_rows)?;
    append_rows(store, rows, header_rows + 1)
}
