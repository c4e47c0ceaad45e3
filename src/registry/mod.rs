//! Registry layer for looking up crate names and versions
//!
//! # Modules
//!
//! - [`crates_io`]: crates.io HTTP API implementation
//! - [`error`]: Error types for registry operations
//! - [`types`]: Values returned by the registry (`CrateSummary`, `CrateVersion`)

#[cfg(test)]
use mockall::automock;

pub mod crates_io;
pub mod error;
pub mod types;

pub use crates_io::CratesIoRegistry;
pub use error::RegistryError;
pub use types::{CrateSummary, CrateVersion};

/// Trait for looking up crates on a remote registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Searches crates whose name matches `term`
    ///
    /// # Returns
    /// * `Ok(Vec<CrateSummary>)` - First page of results, in registry order
    /// * `Err(RegistryError)` - If the request or response decoding fails
    async fn search_crates(&self, term: &str) -> Result<Vec<CrateSummary>, RegistryError>;

    /// Fetches all published versions of a crate, yanked ones included
    ///
    /// # Returns
    /// * `Ok(Vec<CrateVersion>)` - Versions in registry order (newest first on crates.io)
    /// * `Err(RegistryError)` - If the request or response decoding fails
    async fn fetch_versions(&self, crate_name: &str) -> Result<Vec<CrateVersion>, RegistryError>;
}
