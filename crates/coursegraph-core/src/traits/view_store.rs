//! ViewStore: key-value persistence of serialized view records.

use crate::errors::StorageError;

/// Key-value sink for materialized views.
///
/// Values are serialized JSON documents. A write overwrites any previous
/// value under the same key; there is no versioning.
pub trait ViewStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Store every entry, all or nothing. Returns the number of entries written.
    ///
    /// The default writes entries one by one; implementations backed by a
    /// transactional store override it.
    fn put_batch(&self, entries: &[(String, String)]) -> Result<usize, StorageError> {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(entries.len())
    }

    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// All stored keys starting with `prefix`, in ascending order.
    fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    /// Number of stored keys.
    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.keys("")?.len())
    }

    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
