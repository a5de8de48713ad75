//! Top-level facade crate for vitals.
//!
//! Re-exports the core types, the agent, and the server so users can
//! depend on a single crate.

pub mod core {
    pub use vitals_core::*;
}

pub mod agent {
    pub use vitals_agent::*;
}

pub mod server {
    pub use vitals_server::*;
}
