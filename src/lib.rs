//! Crate name and version completion for Cargo.toml, served over LSP

pub mod config;
pub mod lsp;
pub mod parser;
pub mod registry;
