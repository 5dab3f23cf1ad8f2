//! Shared application state for the hitbadge gateway.
//!
//! Holds the parsed config, the counter store and the metrics registry.
//! There is no per-key state here: every count lives in the store.

use std::sync::Arc;

use hitbadge_core::badge::BadgeDefaults;
use hitbadge_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::metrics::HitMetrics;
use crate::store::{self, CounterStore, MeteredStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn CounterStore>,
    metrics: Arc<HitMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    badge_defaults: BadgeDefaults,
}

impl AppState {
    /// Build state around an already constructed store.
    pub fn new(cfg: GatewayConfig, store: Arc<dyn CounterStore>) -> Self {
        let metrics = Arc::new(HitMetrics::default());
        let store: Arc<dyn CounterStore> =
            Arc::new(MeteredStore::new(store, Arc::clone(&metrics)));
        let badge_defaults = cfg.badge.defaults();

        Self {
            inner: Arc::new(AppStateInner { cfg, badge_defaults }),
            store,
            metrics,
        }
    }

    /// Build state and the store the config selects.
    pub async fn from_config(cfg: GatewayConfig) -> Result<Self> {
        let store = store::from_config(&cfg.store).await?;
        Ok(Self::new(cfg, store))
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn badge_defaults(&self) -> &BadgeDefaults {
        &self.inner.badge_defaults
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.store.as_ref()
    }

    pub fn metrics(&self) -> Arc<HitMetrics> {
        Arc::clone(&self.metrics)
    }
}
