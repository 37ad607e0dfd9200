//! Error types shared by every module in the crate.

use thiserror::Error;

/// Errors raised while validating polar code parameters or helper inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structural invariant of the code (block size, frozen layout) does not hold
    #[error("invalid code configuration: {0}")]
    InvalidCodeConfiguration(String),

    /// An ancillary argument (bit width, buffer length) is outside its contract
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Error::InvalidCodeConfiguration(msg.into())
    }

    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
