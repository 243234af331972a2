use crate::error::Result;
use crate::re2::Re2Config;
use crate::third_party::ThirdPartyConfig;
use serde::{Deserialize, Serialize};

/// Resolved configuration for one bundled library, in the shape the
/// build-configuration aggregator consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LibraryReport {
    pub name: String,
    pub uniq_cfg_path: String,
    pub link_args: Vec<String>,
}

impl LibraryReport {
    pub fn for_re2<C: ThirdPartyConfig>(re2: &Re2Config<C>) -> Result<Self> {
        Ok(Self {
            name: "re2".to_string(),
            uniq_cfg_path: re2.uniq_cfg_path()?,
            link_args: re2.link_args()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::BuildEnv;
    use crate::third_party::DefaultThirdPartyConfig;
    use tempfile::TempDir;

    #[test]
    fn report_serializes_to_snake_case_json() {
        let temp = TempDir::new().unwrap();
        let re2 = Re2Config::new(DefaultThirdPartyConfig::new(BuildEnv::new(
            "linux64",
            "gnu",
            temp.path(),
        )));

        let report = LibraryReport::for_re2(&re2).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["name"], "re2");
        assert_eq!(json["uniq_cfg_path"], "linux64/gnu");
        assert_eq!(
            json["link_args"],
            serde_json::json!(["-lre2", "-lpthread"])
        );
    }
}
