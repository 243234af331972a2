//! Build environment probing
//!
//! Collects the toolchain-level settings the third-party helpers depend on:
//! the target platform, the target compiler family, and the root of the
//! bundled third-party tree. Each can be overridden through `BUILDENV_*`
//! environment variables; otherwise host-derived defaults apply.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const TARGET_PLATFORM_VAR: &str = "BUILDENV_TARGET_PLATFORM";
pub const TARGET_COMPILER_VAR: &str = "BUILDENV_TARGET_COMPILER";
pub const THIRD_PARTY_VAR: &str = "BUILDENV_THIRD_PARTY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildEnv {
    pub target_platform: String,
    pub target_compiler: String,
    pub third_party_root: PathBuf,
}

impl BuildEnv {
    pub fn new(
        target_platform: impl Into<String>,
        target_compiler: impl Into<String>,
        third_party_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target_platform: target_platform.into(),
            target_compiler: target_compiler.into(),
            third_party_root: third_party_root.into(),
        }
    }

    /// Build the environment from `BUILDENV_*` variables, falling back to
    /// host defaults for anything unset.
    pub fn from_env() -> Self {
        let target_platform =
            env::var(TARGET_PLATFORM_VAR).unwrap_or_else(|_| host_platform());
        let target_compiler =
            env::var(TARGET_COMPILER_VAR).unwrap_or_else(|_| default_compiler());
        let third_party_root = env::var_os(THIRD_PARTY_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("third-party"));

        tracing::debug!(
            "build env: platform={}, compiler={}, third_party={:?}",
            target_platform,
            target_compiler,
            third_party_root
        );

        Self {
            target_platform,
            target_compiler,
            third_party_root,
        }
    }
}

/// Platform token in the toolchain's naming scheme, with pointer width
/// folded into the name (e.g. `linux64`).
fn host_platform() -> String {
    let os = env::consts::OS;
    if cfg!(target_pointer_width = "64") {
        format!("{os}64")
    } else {
        os.to_string()
    }
}

fn default_compiler() -> String {
    match env::consts::OS {
        "macos" => "clang".to_string(),
        _ => "gnu".to_string(),
    }
}
