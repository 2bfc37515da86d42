//! Error types for parameter operations.

use pd_core::PdError;
use thiserror::Error;

/// Errors that can occur while addressing device parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("No parameter named {name:?}")]
    NotFound { name: String },

    #[error("Parameter index out of range: {what} (index={index}, count={count})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        count: usize,
    },
}

pub type ParamResult<T> = Result<T, ParamError>;

impl From<ParamError> for PdError {
    fn from(e: ParamError) -> Self {
        match e {
            ParamError::NotFound { .. } => PdError::InvalidArg {
                what: "unknown parameter name",
            },
            ParamError::OutOfRange { what, index, count } => PdError::IndexOob {
                what,
                index,
                len: count,
            },
        }
    }
}
