//! In-memory view store (tests and dry runs).

use std::collections::BTreeMap;
use std::sync::Mutex;

use coursegraph_core::errors::StorageError;
use coursegraph_core::traits::ViewStore;

#[derive(Debug, Default)]
pub struct MemoryViewStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::LockPoisoned {
            store: "memory store",
        })
    }
}

impl ViewStore for MemoryViewStore {
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn put_batch(&self, entries: &[(String, String)]) -> Result<usize, StorageError> {
        let mut guard = self.lock()?;
        for (key, value) in entries {
            guard.insert(key.clone(), value.clone());
        }
        Ok(entries.len())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .lock()?
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites() {
        let store = MemoryViewStore::new();
        store.put("epfl", "1").unwrap();
        store.put("epfl", "2").unwrap();
        assert_eq!(store.get("epfl").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn keys_filter_by_prefix_in_order() {
        let store = MemoryViewStore::new();
        let entries = vec![
            ("epfl_master".to_string(), "{}".to_string()),
            ("course_cs-101".to_string(), "{}".to_string()),
            ("epfl".to_string(), "{}".to_string()),
            ("nav".to_string(), "{}".to_string()),
        ];
        assert_eq!(store.put_batch(&entries).unwrap(), 4);
        assert_eq!(store.keys("epfl").unwrap(), vec!["epfl", "epfl_master"]);
        assert_eq!(store.keys("").unwrap().len(), 4);
        assert!(store.keys("zzz").unwrap().is_empty());
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let store = std::sync::Arc::new(MemoryViewStore::new());
        let writer = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = writer.entries.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(
            store.get("epfl"),
            Err(StorageError::LockPoisoned { store: "memory store" })
        ));
    }
}
