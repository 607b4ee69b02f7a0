//! # sheetsync-store
//!
//! The tabular store contract and the operations that move row data through
//! it: non-empty-row filtering, header-preserving truncate and replace,
//! batch append, named-range configuration lookup, and the glue that turns
//! JSON payloads into records and rows. [`MemorySheet`] is the in-memory
//! reference store used by tests and small pipelines.

pub mod config;
pub mod json;
pub mod memory;
pub mod rows;
pub mod store;

pub use config::{config_variable, MemoryNamedRanges, NamedRanges, CONFIG_SHEET};
pub use json::{records_from_json, rows_from_records, Record};
pub use memory::MemorySheet;
pub use rows::{append_rows, is_non_empty_row, non_empty_rows, truncate_rows, write_rows};
pub use store::SheetStore;
