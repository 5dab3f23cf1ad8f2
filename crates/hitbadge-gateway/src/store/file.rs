//! Directory-backed store: one file per key.
//!
//! File names are the hex-encoded key, so any path maps to a safe name.
//! Hex names longer than one segment are split: every full segment but the
//! last becomes a `<hex>.d` directory. Hex never contains `.`, so a split
//! key can not collide with a short key's file.
//! Writes go to a temp file first and are renamed into place; a reader sees
//! either the old or the new value, never a partial one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use hitbadge_core::error::{HitBadgeError, Result};
use thiserror::Error;
use tokio::fs;

use super::CounterStore;

// Most filesystems cap a single name at 255 bytes. Leaves room for the
// `.d` and temp suffixes.
const SEGMENT_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("{op} {path}: {source}")]
    Io {
        op: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<FileStoreError> for HitBadgeError {
    fn from(e: FileStoreError) -> Self {
        HitBadgeError::Store(e.to_string())
    }
}

fn io_err(op: &'static str, path: &Path, source: std::io::Error) -> FileStoreError {
    FileStoreError::Io {
        op,
        path: path.display().to_string(),
        source,
    }
}

pub struct FileStore {
    dir: PathBuf,
    tmp_seq: AtomicU64,
}

impl FileStore {
    /// Open (and create if needed) the store directory.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_err("create_dir", &dir, e))?;
        Ok(Self {
            dir,
            tmp_seq: AtomicU64::new(0),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name = hex::encode(key.as_bytes());
        let mut path = self.dir.clone();
        let mut rest = name.as_str();
        while rest.len() > SEGMENT_LEN {
            let (segment, tail) = rest.split_at(SEGMENT_LEN);
            path.push(format!("{segment}.d"));
            rest = tail;
        }
        path.push(rest);
        path
    }

    /// Temp file next to `path`, unique across processes sharing the directory.
    fn temp_path(&self, path: &Path) -> PathBuf {
        let seq = self.tmp_seq.fetch_add(1, Ordering::Relaxed);
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".tmp{}-{seq}", std::process::id()));
        path.with_file_name(name)
    }
}

#[async_trait]
impl CounterStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err("read", &path, e).into()),
        }
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent().filter(|p| *p != self.dir.as_path()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_err("create_dir", parent, e))?;
        }

        let tmp = self.temp_path(&path);
        let written = match fs::write(&tmp, value.as_bytes()).await {
            Ok(()) => fs::rename(&tmp, &path)
                .await
                .map_err(|e| io_err("rename", &path, e)),
            Err(e) => Err(io_err("write", &tmp, e)),
        };
        if written.is_err() {
            let _ = fs::remove_file(&tmp).await;
        }
        written.map_err(Into::into)
    }
}
