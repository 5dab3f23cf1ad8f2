//! Backing store seam.
//!
//! The counter only needs `get` and `put` by key. Implementations are free to
//! be eventually consistent: nothing here offers compare-and-swap, and the
//! counter adapter does not assume one.

pub mod file;
pub mod memory;
pub mod metered;

use std::sync::Arc;

use async_trait::async_trait;
use hitbadge_core::error::Result;

use crate::config::{StoreBackend, StoreSection};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use metered::MeteredStore;

/// Key-value collaborator holding string-encoded counter values.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn put(&self, key: &str, value: String) -> Result<()>;
}

/// Build the store selected by config.
pub async fn from_config(cfg: &StoreSection) -> Result<Arc<dyn CounterStore>> {
    let store: Arc<dyn CounterStore> = match cfg.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => Arc::new(FileStore::open(&cfg.path).await?),
    };
    tracing::info!(backend = store.backend(), "counter store ready");
    Ok(store)
}
