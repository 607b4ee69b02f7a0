//! Key-value property stores.

use indexmap::IndexMap;
use sheetsync_core::SyncResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// String-keyed settings persisted by the host.
pub trait PropertyStore {
    /// Value stored under `key`, or `None` when the key is unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn property(&self, key: &str) -> SyncResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set_property(&mut self, key: &str, value: &str) -> SyncResult<()>;
}

/// In-memory properties for tests and glue code.
#[derive(Debug, Clone, Default)]
pub struct MemoryProperties {
    values: IndexMap<String, String>,
}

impl MemoryProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryProperties {
    fn property(&self, key: &str) -> SyncResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_property(&mut self, key: &str, value: &str) -> SyncResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Properties persisted as a JSON object on disk.
///
/// The file is read once on open and written through on every set. A missing
/// file opens as an empty store; the file is created on the first set.
#[derive(Debug)]
pub struct FileProperties {
    path: PathBuf,
    values: IndexMap<String, String>,
}

impl FileProperties {
    /// Open the properties file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not a JSON object
    /// of strings.
    pub fn open<P: AsRef<Path>>(path: P) -> SyncResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(FileProperties { path, values })
    }

    fn persist(&self) -> SyncResult<()> {
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl PropertyStore for FileProperties {
    fn property(&self, key: &str) -> SyncResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_property(&mut self, key: &str, value: &str) -> SyncResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsync_core::SyncError;
    use tempfile::TempDir;

    #[test]
    fn test_memory_properties_round_trip() {
        let mut props = MemoryProperties::new();
        assert_eq!(props.property("last_run").unwrap(), None);

        props.set_property("last_run", "2024-05-01").unwrap();
        assert_eq!(
            props.property("last_run").unwrap(),
            Some("2024-05-01".to_string())
        );

        props.set_property("last_run", "2024-05-02").unwrap();
        assert_eq!(
            props.property("last_run").unwrap(),
            Some("2024-05-02".to_string())
        );
    }

    #[test]
    fn test_file_properties_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let props = FileProperties::open(dir.path().join("props.json")).unwrap();
        assert_eq!(props.property("anything").unwrap(), None);
    }

    #[test]
    fn test_file_properties_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("props.json");

        let mut props = FileProperties::open(&path).unwrap();
        props.set_property("cursor", "42").unwrap();
        drop(props);

        let reopened = FileProperties::open(&path).unwrap();
        assert_eq!(reopened.property("cursor").unwrap(), Some("42".to_string()));
    }

    #[test]
    fn test_file_properties_reject_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("props.json");
        fs::write(&path, "not json").unwrap();

        let err = FileProperties::open(&path).unwrap_err();
        assert!(matches!(err, SyncError::Json(_)));
    }
}
