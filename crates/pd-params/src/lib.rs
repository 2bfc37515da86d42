//! Persisted-parameter subsystem for devices.
//!
//! Every device owns one (possibly empty) block of float parameters kept in
//! non-volatile memory. This crate only addresses that memory; durability is
//! the storage backend's problem. Addressing is 1-based with an offset
//! (effective index = `idx + offset`), each slot may carry a name assigned
//! exactly once, and named slots serialize into the script snapshot.

pub mod block;
pub mod error;
pub mod storage;

pub use block::{MAX_PARAM_NAME_LEN, ParamBlock};
pub use error::{ParamError, ParamResult};
pub use storage::{ErrorParams, ErrorParamsRef, FloatStorage, MemoryFloatStorage};
