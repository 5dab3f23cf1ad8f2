//! Lightweight in-process metrics (dependency-free).
//!
//! Counters and a latency histogram stored as atomics, rendered in the
//! Prometheus text format by the ops `/metrics` handler.

pub mod metrics;
