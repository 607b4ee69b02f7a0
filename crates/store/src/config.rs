//! Named-range configuration lookup.

use indexmap::IndexMap;
use sheetsync_core::{CellValue, SyncError, SyncResult};

/// Name of the sheet holding configuration cells.
pub const CONFIG_SHEET: &str = "config";

/// Resolution of workbook-scoped named ranges to single cell values.
pub trait NamedRanges {
    /// Value of the named cell, or `None` when the name is not defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn named_value(&self, name: &str) -> SyncResult<Option<CellValue>>;
}

/// Look up the configuration cell named `config!{id}`.
///
/// # Errors
///
/// Fails with a missing-config error naming `id` when the range is not
/// defined.
pub fn config_variable<R>(ranges: &R, id: &str) -> SyncResult<CellValue>
where
    R: NamedRanges + ?Sized,
{
    let name = format!("{CONFIG_SHEET}!{id}");
    ranges
        .named_value(&name)?
        .ok_or_else(|| SyncError::MissingConfig(id.to_string()))
}

/// In-memory named ranges for tests and glue code.
#[derive(Debug, Clone, Default)]
pub struct MemoryNamedRanges {
    ranges: IndexMap<String, CellValue>,
}

impl MemoryNamedRanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or replace a named cell value.
    pub fn define<T: Into<CellValue>>(&mut self, name: &str, value: T) {
        self.ranges.insert(name.to_string(), value.into());
    }
}

impl NamedRanges for MemoryNamedRanges {
    fn named_value(&self, name: &str) -> SyncResult<Option<CellValue>> {
        Ok(self.ranges.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_variable_resolves_prefixed_name() {
        let mut ranges = MemoryNamedRanges::new();
        ranges.define("config!api_url", "https://api.example.com");
        let value = config_variable(&ranges, "api_url").unwrap();
        assert_eq!(
            value,
            CellValue::String("https://api.example.com".to_string())
        );
    }

    #[test]
    fn test_config_variable_missing() {
        let ranges = MemoryNamedRanges::new();
        let err = config_variable(&ranges, "api_url").unwrap_err();
        assert!(matches!(err, SyncError::MissingConfig(id) if id == "api_url"));
    }

    #[test]
    fn test_config_variable_ignores_unprefixed_name() {
        let mut ranges = MemoryNamedRanges::new();
        ranges.define("api_url", "plain");
        let err = config_variable(&ranges, "api_url").unwrap_err();
        assert!(matches!(err, SyncError::MissingConfig(_)));
    }

    #[test]
    fn test_define_replaces_value() {
        let mut ranges = MemoryNamedRanges::new();
        ranges.define("config!retries", 3);
        ranges.define("config!retries", 5);
        let value = config_variable(&ranges, "retries").unwrap();
        assert_eq!(value, CellValue::Int(5));
    }
}
