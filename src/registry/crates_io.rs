//! crates.io registry API implementation

use reqwest::Url;
use tracing::{debug, warn};

use crate::config::{DEFAULT_REGISTRY_URL, SEARCH_PER_PAGE, USER_AGENT};
use crate::registry::Registry;
use crate::registry::error::RegistryError;
use crate::registry::types::{CrateSummary, CrateVersion, SearchResponse, VersionsResponse};

/// Registry implementation for the crates.io API
pub struct CratesIoRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl CratesIoRegistry {
    /// Creates a new CratesIoRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, term: &str) -> Result<Url, RegistryError> {
        let per_page = SEARCH_PER_PAGE.to_string();
        Url::parse_with_params(
            &format!("{}/api/v1/crates", self.base_url),
            &[("page", "1"), ("per_page", per_page.as_str()), ("q", term)],
        )
        .map_err(|e| RegistryError::InvalidUrl(e.to_string()))
    }

    fn versions_url(&self, crate_name: &str) -> Result<Url, RegistryError> {
        let mut url = Url::parse(&format!("{}/api/v1/crates", self.base_url))
            .map_err(|e| RegistryError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| RegistryError::InvalidUrl(self.base_url.clone()))?
            .push(crate_name)
            .push("versions");
        Ok(url)
    }

    /// GET `url` and decode its JSON body; a 404 becomes `not_found`
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        not_found: RegistryError,
    ) -> Result<T, RegistryError> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(not_found);
        }

        if !status.is_success() {
            warn!("crates.io returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse crates.io response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

impl Default for CratesIoRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL)
    }
}

#[async_trait::async_trait]
impl Registry for CratesIoRegistry {
    async fn search_crates(&self, term: &str) -> Result<Vec<CrateSummary>, RegistryError> {
        let url = self.search_url(term)?;
        let not_found =
            RegistryError::InvalidResponse("Search endpoint not found".to_string());
        let response: SearchResponse = self.get_json(url, not_found).await?;
        Ok(response.crates)
    }

    async fn fetch_versions(&self, crate_name: &str) -> Result<Vec<CrateVersion>, RegistryError> {
        let url = self.versions_url(crate_name)?;
        let not_found = RegistryError::NotFound(crate_name.to_string());
        let response: VersionsResponse = self.get_json(url, not_found).await?;
        Ok(response.versions)
    }
}
