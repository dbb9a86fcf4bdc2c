use std::collections::HashMap;
use std::io;

/// Read capability over a named-value store holding OS version metadata.
///
/// The live implementation reads the Windows registry; tests substitute
/// [`InMemoryStore`]. A missing value reads as an [`io::ErrorKind::NotFound`]
/// error.
pub trait VersionStore: Send + Sync {
    /// Reads the string value stored under `name`.
    fn read_string(&self, name: &str) -> io::Result<String>;
}

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any previous entry under `name`.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl VersionStore for InMemoryStore {
    fn read_string(&self, name: &str) -> io::Result<String> {
        self.values.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("value `{name}` not found"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_reads_back_value() {
        let store = InMemoryStore::new().with("ProductName", "Windows 10 Pro");
        let value = store
            .read_string("ProductName")
            .expect("read should succeed");
        assert_eq!(value, "Windows 10 Pro");
    }

    #[test]
    fn in_memory_store_missing_value_is_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .read_string("ProductName")
            .expect_err("read should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("ProductName"));
    }

    #[test]
    fn in_memory_store_overwrites_existing_value() {
        let store = InMemoryStore::new()
            .with("ReleaseId", "1909")
            .with("ReleaseId", "2004");
        let value = store.read_string("ReleaseId").expect("read should succeed");
        assert_eq!(value, "2004");
    }

    #[test]
    fn in_memory_store_empty_value_is_readable() {
        let store = InMemoryStore::new().with("CSDVersion", "");
        let value = store
            .read_string("CSDVersion")
            .expect("read should succeed");
        assert_eq!(value, "");
    }

    #[test]
    fn in_memory_store_default_is_empty() {
        let store = InMemoryStore::default();
        assert!(store.read_string("anything").is_err());
    }

    #[test]
    fn in_memory_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryStore>();
    }
}
