//! Values returned by the registry API

use serde::Deserialize;

/// A search hit from `GET /api/v1/crates`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrateSummary {
    pub name: String,
    /// Null on crates.io when every release is a pre-release
    #[serde(default)]
    pub max_stable_version: Option<String>,
    #[serde(default)]
    pub max_version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CrateSummary {
    pub fn new(name: &str, max_stable_version: &str, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            max_stable_version: Some(max_stable_version.to_string()),
            max_version: Some(max_stable_version.to_string()),
            description: description.map(str::to_string),
        }
    }

    /// Version offered as the placeholder default: latest stable, else latest of any kind
    pub fn suggested_version(&self) -> &str {
        self.max_stable_version
            .as_deref()
            .or(self.max_version.as_deref())
            .unwrap_or_default()
    }
}

/// A published version from `GET /api/v1/crates/{name}/versions`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrateVersion {
    pub num: String,
    #[serde(default)]
    pub yanked: bool,
}

impl CrateVersion {
    pub fn new(num: &str, yanked: bool) -> Self {
        Self {
            num: num.to_string(),
            yanked,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub crates: Vec<CrateSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VersionsResponse {
    pub versions: Vec<CrateVersion>,
}
