use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum KeyValueError {
    #[error("kv.io_error")]
    Io(#[from] std::io::Error),
    #[error("kv.corrupt_file")]
    Corrupt,
    #[error("kv.encode_error")]
    Encode,
}

/// Configuration for the local key-value file
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// String-keyed, string-valued durable storage kept in one JSON file.
///
/// Every write replaces the file through a synced temp file and a rename, so
/// a reader sees either the previous or the new content, never a torn write.
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write of the whole file.
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            path: config.path.clone(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_entries().await?;
        Ok(entries.get(key).cloned())
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    pub async fn remove_item(&self, key: &str) -> Result<(), KeyValueError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries_for_write().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, KeyValueError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|_| KeyValueError::Corrupt),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Like `read_entries`, but an unreadable file is replaced rather than
    /// blocking every future write.
    async fn read_entries_for_write(&self) -> Result<BTreeMap<String, String>, KeyValueError> {
        match self.read_entries().await {
            Err(KeyValueError::Corrupt) => {
                tracing::warn!(path = %self.path.display(), "Overwriting corrupt key-value file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), KeyValueError> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(|_| KeyValueError::Encode)?;

        let dir = parent_dir(&self.path);
        tokio::fs::create_dir_all(dir).await?;

        let tmp_path = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp_path).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path).await?;
        // The rename is only durable once the directory entry is synced.
        tokio::fs::File::open(dir).await?.sync_all().await?;
        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Key-value file written");
        Ok(())
    }
}

/// Directory holding `path`; a bare file name lives in the working directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
