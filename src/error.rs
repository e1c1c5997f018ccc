//! Error types.
//!
//! Running out of cards is not an error: `Shoe::deal` returns `None`.
//! Everything here is either a rejected configuration or an internal
//! consistency fault that makes the shoe unfit to deal from.

use thiserror::Error;

use crate::shoe::IntegrityFault;

/// Errors raised while constructing, resetting, shuffling or restoring a shoe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShoeError {
    #[error("invalid shoe configuration: {0}")]
    InvalidConfig(String),

    #[error("shoe integrity check failed: {0}")]
    Integrity(#[from] IntegrityFault),

    #[error("invalid shoe snapshot: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for ShoeError {
    fn from(err: bincode::Error) -> Self {
        ShoeError::Snapshot(err.to_string())
    }
}
