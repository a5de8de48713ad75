//! vitals agent library entry.
//!
//! This crate wires the collector (host sampling), the reporter (HTTP
//! push), and the dual-interval scheduler into the agent process. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod collector;
pub mod config;
pub mod reporter;
pub mod scheduler;
