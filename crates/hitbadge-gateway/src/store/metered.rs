use std::sync::Arc;

use async_trait::async_trait;
use hitbadge_core::error::Result;

use super::CounterStore;
use crate::obs::metrics::HitMetrics;

/// Wraps a store and counts failed calls per operation.
pub struct MeteredStore {
    inner: Arc<dyn CounterStore>,
    metrics: Arc<HitMetrics>,
}

impl MeteredStore {
    pub fn new(inner: Arc<dyn CounterStore>, metrics: Arc<HitMetrics>) -> Self {
        Self { inner, metrics }
    }

    fn record<T>(&self, op: &str, res: Result<T>) -> Result<T> {
        if let Err(e) = &res {
            self.metrics.store_errors.inc(&[("op", op)]);
            tracing::error!(backend = self.inner.backend(), op, error = %e, "store call failed");
        }
        res
    }
}

#[async_trait]
impl CounterStore for MeteredStore {
    fn backend(&self) -> &'static str {
        self.inner.backend()
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let res = self.inner.get(key).await;
        self.record("get", res)
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let res = self.inner.put(key, value).await;
        self.record("put", res)
    }
}
