//! Parser layer
//! - types.rs: Common types (CompletionContext) and manifest detection
//! - text.rs: Line and cursor text helpers
//! - cargo_toml.rs: Cargo.toml cursor context detection

pub mod cargo_toml;
pub mod text;
pub mod types;

pub use cargo_toml::CargoTomlContext;
pub use text::text_before_cursor;
pub use types::{CompletionContext, is_cargo_manifest};
