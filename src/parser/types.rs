//! Common types for the manifest parser

/// Which completion applies at the cursor, decided from the text before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Cursor is outside a `[dependencies]` table
    OutsideDependencies,
    /// Cursor is on the key of a dependency line (no `=` typed yet)
    CrateName { query: String },
    /// Cursor is inside the quoted value after `name = "`
    CrateVersion { crate_name: String },
    /// Cursor is past `=` but not inside an opening quote
    Unsupported,
}

/// Detect whether the URI points at a Cargo manifest
pub fn is_cargo_manifest(uri: &str) -> bool {
    uri.ends_with("/Cargo.toml") || uri.ends_with("\\Cargo.toml")
}
