//! File-backed configuration store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::envfile;
use crate::error::AdminError;

/// In-memory, insertion-ordered view of the persisted env file.
///
/// Loaded whole at the start of a request, mutated in memory, and written
/// back whole only on an explicit save.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl ConfigStore {
    /// Load the store from `path`. A file that does not exist yet yields an
    /// empty store; any other read failure is surfaced.
    pub fn load(path: &Path) -> Result<Self, AdminError> {
        let entries = match fs::read_to_string(path) {
            Ok(text) => envfile::decode(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "env file missing, starting empty");
                IndexMap::new()
            }
            Err(source) => {
                return Err(AdminError::StorageRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value. A new key appends; an existing key keeps its position.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Write the store back to its file as a whole-file replace.
    pub fn save(&self) -> Result<(), AdminError> {
        fs::write(&self.path, envfile::encode(&self.entries)).map_err(|source| {
            AdminError::StorageWrite {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::info!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "configuration saved"
        );
        Ok(())
    }
}
