//! vitals core: metric kinds, the storage contract, and the routing service
//! shared by the agent and the server.
//!
//! This crate defines the store semantics both processes must agree on
//! (gauge last-write-wins, counter cumulative-add) and the error surface.
//! It intentionally carries no transport or runtime dependencies so it can
//! be reused on either side of the wire.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `VitalsError`/`Result` so production
//! processes do not crash on malformed values.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod service;
pub mod storage;

/// Shared result type.
pub use error::{Result, VitalsError};
pub use metric::MetricKind;
