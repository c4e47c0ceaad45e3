//! Cargo.toml cursor context detection
//!
//! Decides which completion applies at a cursor by scanning the manifest text
//! line by line. This is a flat heuristic, not a TOML parser:
//!
//! - the nearest preceding `[...]` header decides whether the cursor is inside
//!   the `[dependencies]` table (dotted or nested headers are compared literally)
//! - the text before the cursor decides between name and version completion
//!
//! Format examples:
//! - Name: `ser` (no `=` yet)
//! - Version: `serde = "1.` (cursor after the opening quote)

use regex::Regex;
use tower_lsp::lsp_types::Position;
use tracing::debug;

use crate::parser::text::{line_at, text_before_cursor};
use crate::parser::types::CompletionContext;

/// Cursor context detector for Cargo.toml files
pub struct CargoTomlContext {
    /// Regex for a table header: `[name]`
    section_header_re: Regex,
    /// Regex for a dependency key followed by an opening quote: `name = "`
    version_value_re: Regex,
}

impl CargoTomlContext {
    /// Name of the only table that receives completions
    pub const DEPENDENCIES_SECTION: &'static str = "dependencies";

    pub fn new() -> Self {
        Self {
            // Unanchored and greedy: `[[dependencies]]` captures `[dependencies]`
            section_header_re: Regex::new(r"\[(.+)\]").unwrap(),
            // Match: name = "
            version_value_re: Regex::new(r#"\s*(.+?)\s*=\s*""#).unwrap(),
        }
    }
}

impl Default for CargoTomlContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CargoTomlContext {
    /// Returns true if the nearest table header above `line_index` is `[dependencies]`.
    ///
    /// Scans from `line_index - 1` upward while the line is greater than 0, so
    /// line 0 is never inspected. Returns false if no header is found.
    pub fn is_in_dependency_section(&self, content: &str, line_index: usize) -> bool {
        // Lines 1..line_index, nearest first; line 0 is never inspected
        let lines: Vec<&str> = content.lines().take(line_index).skip(1).collect();

        lines
            .iter()
            .rev()
            .find_map(|text| self.section_header_re.captures(text))
            .is_some_and(|caps| &caps[1] == Self::DEPENDENCIES_SECTION)
    }

    /// Extracts the crate name from text like `serde = "`, if the cursor is past the opening quote.
    pub fn crate_name_before_value(&self, text: &str) -> Option<String> {
        self.version_value_re
            .captures(text)
            .map(|caps| caps[1].to_string())
    }

    /// Classifies the cursor position in `content`.
    pub fn classify(&self, content: &str, position: Position) -> CompletionContext {
        if !self.is_in_dependency_section(content, position.line as usize) {
            return CompletionContext::OutsideDependencies;
        }

        let text = text_before_cursor(content, position);

        if !text.contains('=') {
            return CompletionContext::CrateName { query: text };
        }

        match self.crate_name_before_value(&text) {
            Some(crate_name) => CompletionContext::CrateVersion { crate_name },
            None => {
                debug!(
                    "No opening quote after '=' on line {}: {:?}",
                    position.line,
                    line_at(content, position.line as usize)
                );
                CompletionContext::Unsupported
            }
        }
    }
}
