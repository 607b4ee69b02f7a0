//! In-memory tabular store.

use crate::store::SheetStore;
use sheetsync_core::{CellValue, Row, SyncError, SyncResult};

/// An in-memory sheet backed by a row-major grid of cells.
///
/// The used range is derived from content: trailing rows and columns holding
/// only blank cells do not count toward `last_row` / `last_column`, so
/// clearing the tail of the sheet shrinks the used range without shrinking
/// the grid.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    grid: Vec<Row>,
}

impl MemorySheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        MemorySheet { grid: Vec::new() }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_rows<T: Into<CellValue>>(rows: Vec<Vec<T>>) -> Self {
        let grid: Vec<Row> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        MemorySheet { grid }
    }

    /// Get internal row storage
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.grid
    }

    /// Get one cell by 1-based coordinates, empty beyond the grid.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> CellValue {
        if row == 0 || column == 0 {
            return CellValue::Empty;
        }
        self.cell_at(row - 1, column - 1)
    }

    fn cell_at(&self, row_idx: usize, col_idx: usize) -> CellValue {
        self.grid
            .get(row_idx)
            .and_then(|row| row.get(col_idx))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    fn check_anchor(row: usize, column: usize) -> SyncResult<()> {
        if row == 0 || column == 0 {
            return Err(SyncError::Store("range anchor is 1-based".to_string()));
        }
        Ok(())
    }
}

impl SheetStore for MemorySheet {
    fn last_row(&self) -> usize {
        self.grid
            .iter()
            .rposition(|row| row.iter().any(|cell| !cell.is_blank()))
            .map_or(0, |i| i + 1)
    }

    fn last_column(&self) -> usize {
        self.grid
            .iter()
            .filter_map(|row| row.iter().rposition(|cell| !cell.is_blank()))
            .map(|i| i + 1)
            .max()
            .unwrap_or(0)
    }

    fn read_range(
        &self,
        row: usize,
        column: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> SyncResult<Vec<Row>> {
        Self::check_anchor(row, column)?;

        let mut out = Vec::with_capacity(num_rows);
        for r in 0..num_rows {
            let mut cells = Vec::with_capacity(num_columns);
            for c in 0..num_columns {
                cells.push(self.cell_at(row - 1 + r, column - 1 + c));
            }
            out.push(cells);
        }
        Ok(out)
    }

    fn write_range(&mut self, row: usize, column: usize, values: &[Row]) -> SyncResult<()> {
        Self::check_anchor(row, column)?;

        for (r, cells) in values.iter().enumerate() {
            let row_idx = row - 1 + r;
            if self.grid.len() <= row_idx {
                self.grid.resize_with(row_idx + 1, Vec::new);
            }
            let grid_row = &mut self.grid[row_idx];
            let needed = column - 1 + cells.len();
            if grid_row.len() < needed {
                grid_row.resize(needed, CellValue::Empty);
            }
            for (c, cell) in cells.iter().enumerate() {
                grid_row[column - 1 + c] = cell.clone();
            }
        }
        Ok(())
    }

    fn clear_range(
        &mut self,
        row: usize,
        column: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> SyncResult<()> {
        Self::check_anchor(row, column)?;

        for r in 0..num_rows {
            let Some(grid_row) = self.grid.get_mut(row - 1 + r) else {
                continue;
            };
            for c in 0..num_columns {
                if let Some(cell) = grid_row.get_mut(column - 1 + c) {
                    *cell = CellValue::Empty;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet() {
        let sheet = MemorySheet::new();
        assert_eq!(sheet.last_row(), 0);
        assert_eq!(sheet.last_column(), 0);
        assert!(sheet.data_range().unwrap().is_empty());
    }

    #[test]
    fn test_from_rows_converts_values() {
        let sheet = MemorySheet::from_rows(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(sheet.cell(1, 1), CellValue::Int(1));
        assert_eq!(sheet.cell(2, 2), CellValue::Int(4));
        assert_eq!(sheet.last_row(), 2);
        assert_eq!(sheet.last_column(), 2);
    }

    #[test]
    fn test_used_range_tracks_content() {
        let sheet = MemorySheet::from_rows(vec![
            vec!["a", "", ""],
            vec!["", "", ""],
            vec!["", "b", ""],
        ]);
        assert_eq!(sheet.last_row(), 3);
        assert_eq!(sheet.last_column(), 2);
    }

    #[test]
    fn test_cleared_tail_stops_counting() {
        let mut sheet = MemorySheet::from_rows(vec![vec!["a"], vec!["b"], vec!["c"]]);
        sheet.clear_range(2, 1, 2, 1).unwrap();
        assert_eq!(sheet.last_row(), 1);
        // the grid itself does not shrink
        assert_eq!(sheet.rows().len(), 3);
    }

    #[test]
    fn test_read_range_pads_with_empty() {
        let sheet = MemorySheet::from_rows(vec![vec![1]]);
        let block = sheet.read_range(1, 1, 2, 2).unwrap();
        assert_eq!(block[0], vec![CellValue::Int(1), CellValue::Empty]);
        assert_eq!(block[1], vec![CellValue::Empty, CellValue::Empty]);
    }

    #[test]
    fn test_write_range_grows_grid() {
        let mut sheet = MemorySheet::new();
        sheet
            .write_range(3, 2, &[vec![CellValue::Int(9)]])
            .unwrap();
        assert_eq!(sheet.cell(3, 2), CellValue::Int(9));
        assert_eq!(sheet.cell(1, 1), CellValue::Empty);
        assert_eq!(sheet.last_row(), 3);
        assert_eq!(sheet.last_column(), 2);
    }

    #[test]
    fn test_write_range_overwrites_in_place() {
        let mut sheet = MemorySheet::from_rows(vec![vec!["old", "keep"]]);
        sheet
            .write_range(1, 1, &[vec![CellValue::String("new".to_string())]])
            .unwrap();
        assert_eq!(sheet.cell(1, 1), CellValue::String("new".to_string()));
        assert_eq!(sheet.cell(1, 2), CellValue::String("keep".to_string()));
    }

    #[test]
    fn test_zero_anchor_is_rejected() {
        let mut sheet = MemorySheet::new();
        assert!(matches!(
            sheet.read_range(0, 1, 1, 1).unwrap_err(),
            SyncError::Store(_)
        ));
        assert!(matches!(
            sheet.write_range(1, 0, &[]).unwrap_err(),
            SyncError::Store(_)
        ));
        assert!(matches!(
            sheet.clear_range(0, 0, 1, 1).unwrap_err(),
            SyncError::Store(_)
        ));
    }

    #[test]
    fn test_data_range_reads_used_rectangle() {
        let sheet = MemorySheet::from_rows(vec![vec!["a", "b"], vec!["c", ""]]);
        let rows = sheet.data_range().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[1][1].is_blank());
    }
}
