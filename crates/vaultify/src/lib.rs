//! Durable key/value storage for small pieces of listing state.
//!
//! The sort engine only ever needs a single string slot, so the surface is a
//! narrow [`Vault`] trait with a redb-backed implementation for real use and
//! an in-memory one for tests and throwaway sessions.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use redb::{Database, ReadableTable, TableDefinition, TableError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

static DEFAULT_VAULT_PATH: Lazy<PathBuf> = Lazy::new(|| {
    tracing::debug!("Initializing vault path...");
    ProjectDirs::from("io.github", "histoire", "histoire")
        .map(|dirs| dirs.data_dir().join("histoire.redb"))
        .unwrap_or_else(|| PathBuf::from("histoire.redb"))
});

const TABLE: TableDefinition<&str, String> = TableDefinition::new("histoire");

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("failed to prepare vault directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Database(#[from] redb::DatabaseError),

    #[error(transparent)]
    Transaction(#[from] redb::TransactionError),

    #[error(transparent)]
    Table(#[from] redb::TableError),

    #[error(transparent)]
    Storage(#[from] redb::StorageError),

    #[error(transparent)]
    Commit(#[from] redb::CommitError),

    #[error("vault lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// A last-writer-wins string store.
pub trait Vault {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: Vault + ?Sized> Vault for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VaultSettings {
    /// Location of the redb file.
    pub path: PathBuf,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_VAULT_PATH.clone(),
        }
    }
}

pub struct RedbVault {
    db: Database,
    path: PathBuf,
}

impl RedbVault {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| VaultError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let db = Database::create(&path)?;
        debug!("vault opened at {}", path.display());
        Ok(Self { db, path })
    }

    pub fn from_settings(settings: &VaultSettings) -> Result<Self> {
        Self::open(&settings.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Vault for RedbVault {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(TABLE) {
            Ok(table) => table,
            // Nothing has been written yet.
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = table.get(key)?.map(|guard| guard.value());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(TABLE)?;
            table.insert(key, value.to_string())?;
        }
        write_txn.commit()?;
        debug!("vault set {} = {}", key, value);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Vault for MemoryVault {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| VaultError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| VaultError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
