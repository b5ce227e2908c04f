//! Layout-subsystem error type.

use thiserror::Error;

/// Errors produced by `oht-layout`.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("offset table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
