use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Registry-related constants
// =============================================================================

/// Default base URL for the crates.io API
pub const DEFAULT_REGISTRY_URL: &str = "https://crates.io";

/// Number of search results requested per name completion
pub const SEARCH_PER_PAGE: u32 = 10;

/// Width of the zero-padded sort key attached to version completions
pub const SORT_TEXT_WIDTH: usize = 10;

/// User agent sent to the registry (crates.io rejects anonymous clients)
pub const USER_AGENT: &str = concat!("crate-completion-lsp/", env!("CARGO_PKG_VERSION"));

/// LSP configuration structure, read from `initializationOptions`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LspConfig {
    pub completion: CompletionConfig,
}

/// Completion-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompletionConfig {
    /// Offer crate names searched on the registry
    pub crate_names: bool,
    /// Offer published versions of the crate on the current line
    pub crate_versions: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            crate_names: true,
            crate_versions: true,
        }
    }
}

impl LspConfig {
    /// Parse `initializationOptions`, falling back to defaults when absent or malformed.
    pub fn from_init_options(options: Option<serde_json::Value>) -> Self {
        options
            .and_then(|value| {
                serde_json::from_value(value)
                    .inspect_err(|e| tracing::warn!("Ignoring invalid initializationOptions: {}", e))
                    .ok()
            })
            .unwrap_or_default()
    }
}

/// Returns the path to the data directory for crate-completion-lsp.
/// Uses $XDG_DATA_HOME/crate-completion-lsp if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/crate-completion-lsp,
/// or ./crate-completion-lsp if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("crate-completion-lsp.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("crate-completion-lsp")
}
