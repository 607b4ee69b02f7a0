//! The tabular store contract.

use sheetsync_core::{Row, SyncResult};

/// A spreadsheet-like tabular store, addressed with 1-based rows and columns.
///
/// Implementations front an external sheet; [`crate::MemorySheet`] is the
/// in-memory reference implementation.
pub trait SheetStore {
    /// 1-based index of the last row holding content, 0 when empty.
    fn last_row(&self) -> usize;

    /// 1-based index of the last column holding content, 0 when empty.
    fn last_column(&self) -> usize;

    /// Read a rectangular block with its top-left cell at (`row`, `column`).
    ///
    /// Cells beyond the stored content read as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the range.
    fn read_range(
        &self,
        row: usize,
        column: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> SyncResult<Vec<Row>>;

    /// Write a rectangular block with its top-left cell at (`row`, `column`).
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn write_range(&mut self, row: usize, column: usize, values: &[Row]) -> SyncResult<()>;

    /// Blank every cell of a rectangular block.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the range.
    fn clear_range(
        &mut self,
        row: usize,
        column: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> SyncResult<()>;

    /// Read the full used range. An empty store yields no rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn data_range(&self) -> SyncResult<Vec<Row>> {
        let rows = self.last_row();
        let columns = self.last_column();
        if rows == 0 || columns == 0 {
            return Ok(Vec::new());
        }
        self.read_range(1, 1, rows, columns)
    }
}
