//! hitbadge core: the transport-agnostic half of the hit counter.
//!
//! Path normalization, integer parsing, badge configuration and SVG badge
//! rendering live here. Nothing in this crate touches the network or the
//! backing store, so every function is deterministic and cheap to test.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `HitBadgeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod badge;
pub mod error;
pub mod key;
pub mod number;

/// Shared result type.
pub use error::{HitBadgeError, Result};
pub use key::CounterKey;
