//! Base error type for the OHT crates.
//!
//! Sub-crates define their own error enums and convert `OhtError` into them
//! via `From` where the two meet (see `oht-sim`).

use thiserror::Error;

/// The top-level error type for `oht-core`.
#[derive(Debug, Error)]
pub enum OhtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `oht-core`.
pub type OhtResult<T> = Result<T, OhtError>;
