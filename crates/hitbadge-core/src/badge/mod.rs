//! Badge configuration and rendering.
//!
//! `config` turns query parameters into a validated [`BadgeConfig`];
//! `render` is the pure rasterizer from that config to SVG markup.

pub mod config;
pub mod render;
mod style;

pub use config::{BadgeConfig, BadgeDefaults};
pub use render::render;
pub use style::BadgeStyle;
