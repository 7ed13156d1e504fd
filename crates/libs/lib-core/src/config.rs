//! # Application Configuration
//!
//! This module manages configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! let profile = &config.genesis_profile;
//! ```
//!
//! The config must be initialized once at application startup using [`init_config()`].
//!
//! ## Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `FEETOKEN_GENESIS_PROFILE` | `swap-dev` |
//! | `FEETOKEN_ARTIFACTS_DIR` | `contracts` |
//! | `FEETOKEN_GENESIS_OUT` | `genesis.json` |
//! | `FEETOKEN_GENESIS_TIMESTAMP` | unset (unix 0) |

use lib_utils::{get_env, get_env_or, parse_utc, unix_seconds, validate_not_empty};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Default genesis profile name.
pub const DEFAULT_GENESIS_PROFILE: &str = "swap-dev";

/// Genesis profile names `FEETOKEN_GENESIS_PROFILE` may take (matched case-insensitively).
pub const KNOWN_GENESIS_PROFILES: &[&str] = &["swap-dev", "legacy-dev"];

/// Configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the genesis profile to build (e.g. `swap-dev`, `legacy-dev`).
    pub genesis_profile: String,

    /// Directory holding the AMM contract artifacts as hex text
    /// (`factory.hex`, `weth.hex`, `router.hex`, optional `binder.hex`).
    pub artifacts_dir: PathBuf,

    /// Where the genesis JSON is written.
    pub genesis_out: PathBuf,

    /// Genesis block timestamp, seconds since the Unix epoch.
    pub genesis_timestamp: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let genesis_profile = get_env_or("FEETOKEN_GENESIS_PROFILE", DEFAULT_GENESIS_PROFILE);
        let artifacts_dir = PathBuf::from(get_env_or("FEETOKEN_ARTIFACTS_DIR", "contracts"));
        let genesis_out = PathBuf::from(get_env_or("FEETOKEN_GENESIS_OUT", "genesis.json"));

        let genesis_timestamp = match get_env("FEETOKEN_GENESIS_TIMESTAMP") {
            Ok(moment) => {
                let parsed = parse_utc(&moment)
                    .map_err(|e| format!("FEETOKEN_GENESIS_TIMESTAMP must be RFC 3339: {}", e))?;
                unix_seconds(parsed)
                    .map_err(|e| format!("FEETOKEN_GENESIS_TIMESTAMP out of range: {}", e))?
            }
            Err(_) => 0,
        };

        Ok(Self {
            genesis_profile,
            artifacts_dir,
            genesis_out,
            genesis_timestamp,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_not_empty(&self.genesis_profile, "FEETOKEN_GENESIS_PROFILE")?;
        let profile = self.genesis_profile.trim();
        if !KNOWN_GENESIS_PROFILES.iter().any(|known| known.eq_ignore_ascii_case(profile)) {
            return Err(format!(
                "FEETOKEN_GENESIS_PROFILE '{}' is not one of {}",
                profile,
                KNOWN_GENESIS_PROFILES.join(", ")
            ));
        }
        validate_not_empty(&self.artifacts_dir.to_string_lossy(), "FEETOKEN_ARTIFACTS_DIR")?;
        validate_not_empty(&self.genesis_out.to_string_lossy(), "FEETOKEN_GENESIS_OUT")?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            genesis_profile: DEFAULT_GENESIS_PROFILE.to_string(),
            artifacts_dir: PathBuf::from("contracts"),
            genesis_out: PathBuf::from("genesis.json"),
            genesis_timestamp: 0,
        }
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<(), String> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG.set(config)
        .map_err(|_| "Config has already been initialized".to_string())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}
