//! Build configuration for the bundled re2 regular-expression library
//!
//! A thin adapter over [`ThirdPartyConfig`]: two niladic queries, each
//! computed at most once and cached for the lifetime of the owner. The
//! module-level [`get_uniq_cfg_path`] and [`get_link_args`] functions give
//! the process-wide memoized form the build-configuration aggregator uses.

use crate::error::Result;
use crate::third_party::{DefaultThirdPartyConfig, ThirdPartyConfig};
use std::sync::OnceLock;

/// System libraries a binary linking re2 needs, in link order.
const RE2_LINK_LIBS: [&str; 2] = ["-lre2", "-lpthread"];

/// Memoizing config adapter for re2.
///
/// Failures are cached exactly like successes: the collaborator runs at
/// most once per query, and a failed first call is replayed to every
/// subsequent caller.
#[derive(Debug)]
pub struct Re2Config<C> {
    config: C,
    uniq_cfg_path: OnceLock<Result<String>>,
    link_args: OnceLock<Result<Vec<String>>>,
}

impl<C: ThirdPartyConfig> Re2Config<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            uniq_cfg_path: OnceLock::new(),
            link_args: OnceLock::new(),
        }
    }

    /// Cache-path token for the current re2 build configuration.
    pub fn uniq_cfg_path(&self) -> Result<String> {
        self.uniq_cfg_path
            .get_or_init(|| {
                tracing::debug!("computing re2 uniq cfg path");
                self.config.default_uniq_cfg_path()
            })
            .clone()
    }

    /// Linker arguments needed to link a binary against re2.
    pub fn link_args(&self) -> Result<Vec<String>> {
        self.link_args
            .get_or_init(|| {
                tracing::debug!("computing re2 link args");
                self.config.default_get_link_args("re2", &RE2_LINK_LIBS)
            })
            .clone()
    }
}

static RE2: OnceLock<Re2Config<DefaultThirdPartyConfig>> = OnceLock::new();

fn global() -> &'static Re2Config<DefaultThirdPartyConfig> {
    RE2.get_or_init(|| Re2Config::new(DefaultThirdPartyConfig::from_env()))
}

/// Process-wide memoized form of [`Re2Config::uniq_cfg_path`].
pub fn get_uniq_cfg_path() -> Result<String> {
    global().uniq_cfg_path()
}

/// Process-wide memoized form of [`Re2Config::link_args`].
pub fn get_link_args() -> Result<Vec<String>> {
    global().link_args()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingConfig {
        cfg_path_calls: AtomicUsize,
        link_args_calls: AtomicUsize,
        fail: bool,
    }

    impl ThirdPartyConfig for RecordingConfig {
        fn default_uniq_cfg_path(&self) -> Result<String> {
            self.cfg_path_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::ConfigError("no re2 build configured".to_string()));
            }
            Ok("linux64/gnu".to_string())
        }

        fn default_get_link_args(&self, name: &str, libs: &[&str]) -> Result<Vec<String>> {
            self.link_args_calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(name, "re2");
            assert_eq!(libs, ["-lre2", "-lpthread"]);
            if self.fail {
                return Err(Error::ConfigError("no re2 build configured".to_string()));
            }
            Ok(libs.iter().map(|s| s.to_string()).collect())
        }
    }

    #[test]
    fn uniq_cfg_path_is_computed_once() {
        let re2 = Re2Config::new(RecordingConfig::default());

        let first = re2.uniq_cfg_path().unwrap();
        let second = re2.uniq_cfg_path().unwrap();
        let third = re2.uniq_cfg_path().unwrap();

        assert_eq!(first, "linux64/gnu");
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(re2.config.cfg_path_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn link_args_are_computed_once_with_fixed_inputs() {
        let re2 = Re2Config::new(RecordingConfig::default());

        let first = re2.link_args().unwrap();
        let second = re2.link_args().unwrap();

        assert_eq!(first, ["-lre2", "-lpthread"]);
        assert_eq!(first, second);
        assert_eq!(re2.config.link_args_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failures_are_cached_and_replayed() {
        let re2 = Re2Config::new(RecordingConfig {
            fail: true,
            ..Default::default()
        });

        let first = re2.link_args().unwrap_err();
        let second = re2.link_args().unwrap_err();

        assert_eq!(first.to_string(), second.to_string());
        assert!(matches!(first, Error::ConfigError(_)));
        assert_eq!(re2.config.link_args_calls.load(Ordering::SeqCst), 1);

        let err = re2.uniq_cfg_path().unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert_eq!(re2.config.cfg_path_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn queries_are_cached_independently() {
        let re2 = Re2Config::new(RecordingConfig::default());

        re2.link_args().unwrap();
        assert_eq!(re2.config.cfg_path_calls.load(Ordering::SeqCst), 0);

        re2.uniq_cfg_path().unwrap();
        assert_eq!(re2.config.cfg_path_calls.load(Ordering::SeqCst), 1);
        assert_eq!(re2.config.link_args_calls.load(Ordering::SeqCst), 1);
    }
}
