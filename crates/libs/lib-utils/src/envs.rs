//! # Environment Variables
//!
//! Reads the `FEETOKEN_*` settings. Blank values count as unset so an empty line in
//! `.env` falls back to the default instead of producing an empty path.

use std::env;

/// Get a non-blank environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        Ok(_) => Err(Error::BlankEnv(name)),
        Err(_) => Err(Error::MissingEnv(name)),
    }
}

/// Get an environment variable, falling back to `default` when unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(&'static str),
    BlankEnv(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
