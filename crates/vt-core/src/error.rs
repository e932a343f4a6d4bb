//! Framework error type.
//!
//! The simulation core has no recoverable failure paths at runtime —
//! unserviceable trips degrade to counted stuck states instead of errors.
//! `Result` therefore only appears at construction and configuration
//! boundaries; sub-crates define their own enums and may wrap `CoreError`.

use thiserror::Error;

/// The top-level error type for `vt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `vt-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
