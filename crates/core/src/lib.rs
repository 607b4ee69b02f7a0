//! # sheetsync-core
//!
//! Shared types for the sheetsync workspace: the [`SyncError`] enum used by
//! every crate, the [`CellValue`] scalar stored in tabular stores, row
//! helpers, and the [`trying`] wrapper for best-effort operations.

pub mod error;
pub mod probe;
pub mod table;
pub mod value;

pub use error::{SyncError, SyncResult};
pub use probe::trying;
pub use table::{rectangular_width, Row};
pub use value::CellValue;
