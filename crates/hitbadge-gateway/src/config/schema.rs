use std::net::SocketAddr;

use hitbadge_core::badge::config::{DEFAULT_ICON_CDN, DEFAULT_LINK};
use hitbadge_core::badge::BadgeDefaults;
use hitbadge_core::error::{HitBadgeError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub badge: BadgeSection,

    #[serde(default)]
    pub ops: OpsSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            store: StoreSection::default(),
            badge: BadgeSection::default(),
            ops: OpsSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(bad_config(format!("unsupported config version: {}", self.version)));
        }

        self.server.validate()?;
        self.store.validate()?;
        self.badge.validate()?;
        self.ops.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| bad_config(format!("server.listen must be a valid SocketAddr: {e}")))
    }
}

fn default_listen() -> String {
    "0.0.0.0:8787".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.backend == StoreBackend::File && self.path.trim().is_empty() {
            return Err(bad_config("store.path must not be empty for the file backend".into()));
        }
        Ok(())
    }
}

fn default_store_path() -> String {
    "./hitbadge-data".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BadgeSection {
    #[serde(default = "default_link")]
    pub default_link: String,

    #[serde(default = "default_icon_cdn")]
    pub icon_cdn: String,
}

impl Default for BadgeSection {
    fn default() -> Self {
        Self {
            default_link: default_link(),
            icon_cdn: default_icon_cdn(),
        }
    }
}

impl BadgeSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.icon_cdn.starts_with("https://") || self.icon_cdn.starts_with("http://")) {
            return Err(bad_config("badge.icon_cdn must be an http(s) URL".into()));
        }
        Ok(())
    }

    pub fn defaults(&self) -> BadgeDefaults {
        BadgeDefaults {
            link: self.default_link.clone(),
            icon_cdn: self.icon_cdn.clone(),
        }
    }
}

fn default_link() -> String {
    DEFAULT_LINK.into()
}
fn default_icon_cdn() -> String {
    DEFAULT_ICON_CDN.into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpsSection {
    #[serde(default = "default_ops_enabled")]
    pub enabled: bool,

    #[serde(default = "default_ops_prefix")]
    pub prefix: String,
}

impl Default for OpsSection {
    fn default() -> Self {
        Self {
            enabled: default_ops_enabled(),
            prefix: default_ops_prefix(),
        }
    }
}

impl OpsSection {
    pub fn validate(&self) -> Result<()> {
        let p = self.prefix.as_str();
        if !p.starts_with('/') || p.len() < 2 || p.ends_with('/') {
            return Err(bad_config(
                "ops.prefix must start with '/', not end with '/', and not be the root".into(),
            ));
        }
        Ok(())
    }
}

fn default_ops_enabled() -> bool {
    true
}
fn default_ops_prefix() -> String {
    "/_".into()
}

fn bad_config(msg: String) -> HitBadgeError {
    HitBadgeError::Config(msg)
}
