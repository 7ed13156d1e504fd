//! # Centralized Error Handling
//!
//! This module defines the workspace-wide error type [`AppError`] used at the tool and
//! loading boundaries (configuration, artifact files, genesis output). It follows the
//! `thiserror` pattern for ergonomic error handling.
//!
//! Runtime query failures inside fee resolution are *not* `AppError`s; they live next to the
//! queries in `lib-feetoken` so callers can match on them precisely.
//!
//! ## Two Error Classes
//!
//! 1. **Recoverable** - returned as [`AppError`]:
//!    - [`Config`](AppError::Config) - bad or missing environment values
//!    - [`Artifact`](AppError::Artifact) - unreadable or malformed bytecode artifacts
//!    - [`Io`](AppError::Io) - filesystem failures
//!    - [`Encoding`](AppError::Encoding) / [`Decoding`](AppError::Decoding)
//!
//! 2. **Fatal** - defects in the workspace's own fixed constants. These can never be fixed by
//!    retrying, so they go through [`fatal_config`], which logs and aborts.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_code(code: &[u8]) -> Result<()> {
//!     if code.is_empty() {
//!         return Err(AppError::Artifact("bytecode is empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt::Display;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Workspace error type for loading and tooling failures.
///
/// Each variant includes a descriptive `String` for context. The `#[error]` attribute
/// from `thiserror` provides automatic `Display` implementation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Contract bytecode artifact missing, empty or not valid hex.
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Filesystem error (reading artifacts, writing genesis output).
    #[error("IO error: {0}")]
    Io(String),

    /// Data encoding error (JSON, hex).
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Data decoding error (JSON, hex).
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Internal error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Abort on a defect in a fixed, embedded constant.
///
/// Only for values compiled into the workspace (addresses, built-in bytecode, signer
/// lists). Never call this for anything derived from transaction input or configuration;
/// those return [`AppError`] instead.
#[track_caller]
pub fn fatal_config(what: &str, detail: impl Display) -> ! {
    tracing::error!("Fatal configuration defect in {}: {}", what, detail);
    panic!("fatal configuration defect in {what}: {detail}")
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `std::io::Error` to `AppError`.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            AppError::Decoding(format!("JSON error: {}", err))
        } else {
            AppError::Encoding(format!("JSON error: {}", err))
        }
    }
}

/// Convert `lib_utils::hex::Error` to `AppError`.
impl From<lib_utils::hex::Error> for AppError {
    fn from(err: lib_utils::hex::Error) -> Self {
        AppError::Decoding(format!("hex error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "fatal configuration defect in binder bytecode")]
    fn test_fatal_config_panics() {
        fatal_config("binder bytecode", "odd number of digits");
    }

    #[test]
    fn test_io_error_converts() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "router.hex").into();
        assert!(matches!(err, AppError::Io(msg) if msg.contains("router.hex")));
    }
}
