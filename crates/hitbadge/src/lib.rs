//! Top-level facade crate for hitbadge.
//!
//! Re-exports the core pipeline types and the gateway library so users can
//! depend on a single crate.

pub mod core {
    pub use hitbadge_core::*;
}

pub mod gateway {
    pub use hitbadge_gateway::*;
}
