//! Persistent preference storage using redb.
//!
//! Holds a single `preferences` table of string keys to string values. The
//! theme store persists under [`crate::theme::THEME_STORAGE_KEY`].

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::KineticResult;
use crate::platform::KeyValueStore;

/// Default database file name inside a data directory
pub const PREFERENCES_FILE: &str = "preferences.redb";

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Key-value store backed by a redb database file
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the database at the given path.
    ///
    /// Creates the parent directory and the preferences table if needed.
    pub fn open(path: impl AsRef<Path>) -> KineticResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened preference store");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the default database file inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> KineticResult<Self> {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }

    /// Remove a stored key. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> KineticResult<bool> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            let removed = table.remove(key)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    /// List every stored key/value pair, ordered by key.
    pub fn entries(&self) -> KineticResult<Vec<(String, String)>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        let mut entries = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            entries.push((key.value().to_string(), value.value().to_string()));
        }
        Ok(entries)
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> KineticResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> KineticResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let store = RedbStore::in_dir(dir.path()).unwrap();

        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        assert!(store.remove("theme").unwrap());
        assert!(!store.remove("theme").unwrap());
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = RedbStore::in_dir(dir.path()).unwrap();
            store.set("theme", "light").unwrap();
            store.set("accent", "gold").unwrap();
        }

        let store = RedbStore::in_dir(dir.path()).unwrap();
        assert_eq!(
            store.entries().unwrap(),
            vec![
                ("accent".to_string(), "gold".to_string()),
                ("theme".to_string(), "light".to_string()),
            ]
        );
    }

    #[test]
    fn test_creates_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join(PREFERENCES_FILE);
        let store = RedbStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.exists());
    }
}
