//! buildenv - third-party build-configuration helpers for a compiler toolchain
//!
//! This crate provides functionality to:
//! - Probe the build environment (target platform, compiler, third-party root)
//! - Locate bundled third-party library builds and derive their link arguments
//! - Expose per-library config adapters with compute-once memoization
pub mod env;
pub mod error;
pub mod re2;
pub mod report;
pub mod third_party;

// Re-export commonly used types and traits
pub use env::BuildEnv;
pub use error::{Error, Result};
pub use report::LibraryReport;
pub use third_party::{DefaultThirdPartyConfig, ThirdPartyConfig};
