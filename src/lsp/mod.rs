//! LSP (Language Server Protocol) implementation layer
//!
//! This module handles communication with editors via LSP and serves
//! crate name and version completions for Cargo.toml.
//!
//! # Modules
//!
//! - [`backend`]: Main LSP backend implementing `LanguageServer` trait
//! - [`completion`]: Name and version completion providers
//! - [`documents`]: Text of open documents
//! - [`server`]: LSP server initialization and lifecycle

pub mod backend;
pub mod completion;
pub mod documents;
pub mod server;
