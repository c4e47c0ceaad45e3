#![allow(dead_code)]

pub mod lsp;
pub mod registry;

#[allow(unused_imports)]
pub use lsp::*;
#[allow(unused_imports)]
pub use registry::*;
