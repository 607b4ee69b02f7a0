//! JSON payloads to records and rows.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use sheetsync_core::{CellValue, Row, SyncError, SyncResult};

/// One JSON object flattened to cells, key order preserved.
pub type Record = IndexMap<String, CellValue>;

/// Convert a JSON array of objects into records.
///
/// The column set is taken from the first object. Keys missing from a later
/// object read as empty cells; keys not present in the first object are
/// dropped.
///
/// # Errors
///
/// Fails if `value` is not an array or an element is not an object.
pub fn records_from_json(value: &JsonValue) -> SyncResult<Vec<Record>> {
    let JsonValue::Array(items) = value else {
        return Err(SyncError::Parse(
            "expected a JSON array of objects".to_string(),
        ));
    };

    let mut columns: Option<Vec<String>> = None;
    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let JsonValue::Object(fields) = item else {
            return Err(SyncError::Parse(format!(
                "element {i} is not a JSON object"
            )));
        };
        let columns = columns.get_or_insert_with(|| fields.keys().cloned().collect());

        let mut record = Record::with_capacity(columns.len());
        for name in columns.iter() {
            let cell = fields
                .get(name)
                .map_or(CellValue::Empty, CellValue::from_json);
            record.insert(name.clone(), cell);
        }
        records.push(record);
    }
    Ok(records)
}

/// Flatten records into a header row of column names plus one row per record.
///
/// Column order follows the first record; keys missing from a later record
/// read as empty cells. The output is the shape `write_rows` consumes. No
/// records yield no rows.
#[must_use]
pub fn rows_from_records(records: &[Record]) -> Vec<Row> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let columns: Vec<&String> = first.keys().collect();

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(
        columns
            .iter()
            .map(|name| CellValue::String((*name).clone()))
            .collect(),
    );
    for record in records {
        rows.push(
            columns
                .iter()
                .map(|name| record.get(*name).cloned().unwrap_or(CellValue::Empty))
                .collect(),
        );
    }
    rows
}
