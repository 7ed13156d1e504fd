//! # Contract Artifacts
//!
//! Runtime bytecode for the four well-known contracts. The AMM contracts (factory,
//! wrapped native, router) are compiled elsewhere and read from a directory of hex files;
//! the binder ships with the crate.

use alloy_primitives::Bytes;
use lib_core::{fatal_config, AppError, Result};
use lib_utils::{hex_decode, hex_encode_prefixed, validate_hex};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

/// Binder runtime: `sstore(caller(), calldataload(4))`.
///
/// Called as `bind(address token)`, it stores the token word under the caller's
/// zero-extended address. Binding the zero address clears the binding.
const BINDER_RUNTIME_HEX: &str = "0x600435335500";

static BINDER_RUNTIME: LazyLock<Bytes> = LazyLock::new(|| match hex_decode(BINDER_RUNTIME_HEX) {
    Ok(code) if !code.is_empty() => code.into(),
    Ok(_) => fatal_config("binder runtime bytecode", "empty"),
    Err(e) => fatal_config("binder runtime bytecode", e),
});

pub const FACTORY_ARTIFACT: &str = "factory.hex";
pub const WRAPPED_NATIVE_ARTIFACT: &str = "weth.hex";
pub const ROUTER_ARTIFACT: &str = "router.hex";
pub const BINDER_ARTIFACT: &str = "binder.hex";

/// Built-in binder runtime bytecode.
pub fn builtin_binder_code() -> Bytes {
    BINDER_RUNTIME.clone()
}

/// Runtime bytecode of the well-known contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifacts {
    pub factory: Bytes,
    pub wrapped_native: Bytes,
    pub router: Bytes,
    pub binder: Bytes,
}

impl ContractArtifacts {
    /// Build from hex strings, using the built-in binder.
    pub fn from_hex(factory: &str, wrapped_native: &str, router: &str) -> Result<Self> {
        Ok(Self {
            factory: decode_artifact(FACTORY_ARTIFACT, factory)?,
            wrapped_native: decode_artifact(WRAPPED_NATIVE_ARTIFACT, wrapped_native)?,
            router: decode_artifact(ROUTER_ARTIFACT, router)?,
            binder: builtin_binder_code(),
        })
    }

    /// Load `factory.hex`, `weth.hex` and `router.hex` from `dir`.
    ///
    /// `binder.hex` is optional; without it the built-in binder is used.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        info!("Loading contract artifacts from {}", dir.display());

        let mut artifacts = Self::from_hex(
            &read_artifact(dir, FACTORY_ARTIFACT)?,
            &read_artifact(dir, WRAPPED_NATIVE_ARTIFACT)?,
            &read_artifact(dir, ROUTER_ARTIFACT)?,
        )?;

        if dir.join(BINDER_ARTIFACT).is_file() {
            artifacts.binder = decode_artifact(BINDER_ARTIFACT, &read_artifact(dir, BINDER_ARTIFACT)?)?;
            info!("Using binder bytecode from {}", BINDER_ARTIFACT);
        }
        debug!("Binder runtime {}", hex_encode_prefixed(&artifacts.binder));

        Ok(artifacts)
    }
}

fn read_artifact(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    debug!("Reading artifact {}", path.display());
    std::fs::read_to_string(&path)
        .map_err(|e| AppError::Artifact(format!("cannot read {}: {}", path.display(), e)))
}

fn decode_artifact(name: &str, text: &str) -> Result<Bytes> {
    validate_hex(text, name).map_err(AppError::Artifact)?;
    Ok(hex_decode(text)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_binder_is_valid() {
        assert_eq!(builtin_binder_code().as_ref(), &[0x60, 0x04, 0x35, 0x33, 0x55, 0x00]);
    }

    #[test]
    fn test_load_dir_reads_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FACTORY_ARTIFACT), "0x6001\n").unwrap();
        fs::write(dir.path().join(WRAPPED_NATIVE_ARTIFACT), "6002").unwrap();
        fs::write(dir.path().join(ROUTER_ARTIFACT), "0x6003").unwrap();

        let artifacts = ContractArtifacts::load_dir(dir.path()).unwrap();
        assert_eq!(artifacts.factory.as_ref(), &[0x60, 0x01]);
        assert_eq!(artifacts.wrapped_native.as_ref(), &[0x60, 0x02]);
        assert_eq!(artifacts.router.as_ref(), &[0x60, 0x03]);
        assert_eq!(artifacts.binder, builtin_binder_code());

        fs::write(dir.path().join(BINDER_ARTIFACT), "0x00").unwrap();
        let artifacts = ContractArtifacts::load_dir(dir.path()).unwrap();
        assert_eq!(artifacts.binder.as_ref(), &[0x00]);
    }

    #[test]
    fn test_missing_artifact_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FACTORY_ARTIFACT), "0x6001").unwrap();

        let err = ContractArtifacts::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Artifact(msg) if msg.contains(WRAPPED_NATIVE_ARTIFACT)));
    }

    #[test]
    fn test_uppercase_prefix_is_accepted() {
        let artifacts = ContractArtifacts::from_hex("0X6001", "0x6002", "6003").unwrap();
        assert_eq!(artifacts.factory.as_ref(), &[0x60, 0x01]);
        assert_eq!(artifacts.router.as_ref(), &[0x60, 0x03]);
    }

    #[test]
    fn test_empty_or_malformed_artifacts_are_rejected() {
        assert!(ContractArtifacts::from_hex("0x", "0x6002", "0x6003").is_err());
        assert!(ContractArtifacts::from_hex("0x6001", "0x600", "0x6003").is_err());
        assert!(ContractArtifacts::from_hex("0x6001", "0x6002", "router").is_err());
    }
}
