//! # Core Library
//!
//! Configuration and error handling shared by the fee-token crates and tools.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{fatal_config, AppError, Result};
