//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use hitbadge_core::error::{HitBadgeError, Result};

pub use schema::{
    BadgeSection, GatewayConfig, OpsSection, ServerSection, StoreBackend, StoreSection,
};

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "HITBADGE_CONFIG";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HitBadgeError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| HitBadgeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `$HITBADGE_CONFIG` when set, otherwise use built-in defaults.
pub fn load_from_env() -> Result<GatewayConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => load_from_file(&path),
        _ => {
            let cfg = GatewayConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}
