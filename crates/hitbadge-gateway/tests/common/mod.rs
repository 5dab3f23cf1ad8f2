//! Test doubles shared by the gateway integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hitbadge_core::error::{HitBadgeError, Result};
use hitbadge_gateway::store::{CounterStore, MemoryStore};

/// Memory store that counts calls and can be told to fail.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: MemoryStore,
    pub gets: AtomicUsize,
    pub puts: AtomicUsize,
    pub fail_get: bool,
    pub fail_put: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_get() -> Self {
        Self { fail_get: true, ..Self::default() }
    }

    pub fn failing_put() -> Self {
        Self { fail_put: true, ..Self::default() }
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CounterStore for RecordingStore {
    fn backend(&self) -> &'static str {
        "recording"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get {
            return Err(HitBadgeError::Store("kv read timed out".into()));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_put {
            return Err(HitBadgeError::Store("kv write rejected".into()));
        }
        self.inner.put(key, value).await
    }
}
