//! pd-core: stable foundation for the device-modeling layer.
//!
//! Contains:
//! - taxonomy (device kinds, scoped sub-kinds, wire tags, render policy)
//! - wire (numeric formatting contract for the script snapshot)
//! - error (shared error types)

pub mod error;
pub mod taxonomy;
pub mod wire;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PdError, PdResult};
pub use taxonomy::*;
pub use wire::*;
