use std::path::Path;
use std::sync::Arc;

use redb::{Database, TableDefinition};

use crate::error::KVError;
use crate::traits::KVStore;

const TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

/// RedbStore is a KVStore implementation backed by redb — a pure-Rust
/// embedded key-value database.
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create a redb database at the given path.
    pub fn open(path: &Path) -> Result<Self, KVError> {
        let db = Database::create(path).map_err(|e| KVError::Storage(e.to_string()))?;

        // Ensure the table exists by doing a write transaction.
        let write_txn = db
            .begin_write()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        {
            let _table = write_txn
                .open_table(TABLE)
                .map_err(|e| KVError::Storage(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| KVError::Storage(e.to_string()))?;

        tracing::debug!("opened redb database at {}", path.display());
        Ok(Self { db: Arc::new(db) })
    }
}

impl KVStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| KVError::Storage(e.to_string()))?;

        match table.get(key) {
            Ok(Some(val)) => Ok(Some(val.value().to_vec())),
            Ok(None) => Ok(None),
            Err(e) => Err(KVError::Storage(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| KVError::Storage(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| KVError::Storage(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KVError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| KVError::Storage(e.to_string()))?;
            table
                .remove(key)
                .map_err(|e| KVError::Storage(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| KVError::Storage(e.to_string()))?;

        let mut results = Vec::new();
        let iter = table
            .range(prefix..)
            .map_err(|e| KVError::Storage(e.to_string()))?;

        for entry in iter {
            let entry = entry.map_err(|e| KVError::Storage(e.to_string()))?;
            let key = entry.0.value().to_string();
            if !key.starts_with(prefix) {
                break;
            }
            let value = entry.1.value().to_vec();
            results.push((key, value));
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (RedbStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::open(&dir.path().join("test.redb")).unwrap();
        (store, dir)
    }

    #[test]
    fn get_missing_returns_none() {
        let (store, _dir) = open_store();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let (store, _dir) = open_store();
        store.set("task:u1:1", b"{\"id\":1}").unwrap();
        assert_eq!(store.get("task:u1:1").unwrap().unwrap(), b"{\"id\":1}");
    }

    #[test]
    fn delete_is_idempotent() {
        let (store, _dir) = open_store();
        store.set("k", b"v").unwrap();
        store.delete("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        // Absent key: still Ok.
        store.delete("k").unwrap();
    }

    #[test]
    fn scan_respects_prefix() {
        let (store, _dir) = open_store();
        store.set("task:a:1", b"1").unwrap();
        store.set("task:a:2", b"2").unwrap();
        store.set("task:b:3", b"3").unwrap();
        store.set("task_seq", b"3").unwrap();

        let hits = store.scan("task:a:").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, "task:a:1");
        assert_eq!(hits[1].0, "task:a:2");

        let all = store.scan("task:").unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.redb");
        {
            let store = RedbStore::open(&path).unwrap();
            store.set("k", b"v").unwrap();
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), b"v");
    }
}
