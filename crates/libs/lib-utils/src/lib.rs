//! # Utilities Library
//!
//! Shared utility functions for hex encoding, environment variables, time, and validation.

pub mod envs;
pub mod hex;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or};
pub use hex::{hex_decode, hex_encode_prefixed};
pub use time::{parse_utc, unix_seconds};
pub use validation::{validate_hex, validate_not_empty};
