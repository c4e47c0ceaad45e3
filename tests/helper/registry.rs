//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate_completion_lsp::registry::{CrateSummary, CrateVersion, Registry, RegistryError};

/// Mock registry for testing; records every lookup it receives
#[derive(Default)]
pub struct MockRegistry {
    search_results: HashMap<String, Vec<CrateSummary>>,
    versions: HashMap<String, Vec<CrateVersion>>,
    calls: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str, crates: Vec<CrateSummary>) -> Self {
        self.search_results.insert(term.to_string(), crates);
        self
    }

    pub fn with_versions(mut self, crate_name: &str, versions: Vec<(&str, bool)>) -> Self {
        self.versions.insert(
            crate_name.to_string(),
            versions
                .into_iter()
                .map(|(num, yanked)| CrateVersion::new(num, yanked))
                .collect(),
        );
        self
    }

    /// Lookups received so far, as `search:<term>` or `versions:<name>`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn search_crates(&self, term: &str) -> Result<Vec<CrateSummary>, RegistryError> {
        self.calls.lock().unwrap().push(format!("search:{term}"));
        Ok(self.search_results.get(term).cloned().unwrap_or_default())
    }

    async fn fetch_versions(&self, crate_name: &str) -> Result<Vec<CrateVersion>, RegistryError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("versions:{crate_name}"));
        match self.versions.get(crate_name) {
            Some(versions) => Ok(versions.clone()),
            None => Err(RegistryError::NotFound(crate_name.to_string())),
        }
    }
}
