//! Completion providers for crate names and versions
//!
//! Both providers share one gate: the cursor must sit inside `[dependencies]`.
//! The presence of `=` before the cursor then picks exactly one of them.

use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionList, InsertTextFormat, Position,
};
use tracing::debug;

use crate::config::{CompletionConfig, SORT_TEXT_WIDTH};
use crate::parser::cargo_toml::CargoTomlContext;
use crate::parser::types::CompletionContext;
use crate::registry::{CrateSummary, CrateVersion, Registry, RegistryError};

/// Empty result; the client keeps filtering locally
pub fn empty_list() -> CompletionList {
    CompletionList {
        is_incomplete: false,
        items: Vec::new(),
    }
}

/// Suggest crate names matching the text typed before the cursor.
///
/// Returns an incomplete list so the client asks again as the user keeps typing.
pub async fn provide_name_completions(
    context: &CargoTomlContext,
    registry: &dyn Registry,
    content: &str,
    position: Position,
) -> Result<CompletionList, RegistryError> {
    let CompletionContext::CrateName { query } = context.classify(content, position) else {
        return Ok(empty_list());
    };

    search_names(registry, &query).await
}

/// Suggest published, non-yanked versions of the crate named on the cursor's line.
///
/// Items keep registry order through a zero-padded `sort_text`.
pub async fn provide_version_completions(
    context: &CargoTomlContext,
    registry: &dyn Registry,
    content: &str,
    position: Position,
) -> Result<CompletionList, RegistryError> {
    let CompletionContext::CrateVersion { crate_name } = context.classify(content, position)
    else {
        return Ok(empty_list());
    };

    lookup_versions(registry, &crate_name).await
}

/// Pick the provider that applies at the cursor and return its list unchanged.
///
/// An empty name list stays incomplete so the client keeps asking while the
/// user types; a disabled or inapplicable provider yields an empty complete list.
pub async fn provide_completions(
    context: &CargoTomlContext,
    registry: &dyn Registry,
    config: &CompletionConfig,
    content: &str,
    position: Position,
) -> Result<CompletionList, RegistryError> {
    match context.classify(content, position) {
        CompletionContext::CrateName { query } if config.crate_names => {
            search_names(registry, &query).await
        }
        CompletionContext::CrateVersion { crate_name } if config.crate_versions => {
            lookup_versions(registry, &crate_name).await
        }
        _ => Ok(empty_list()),
    }
}

async fn search_names(
    registry: &dyn Registry,
    query: &str,
) -> Result<CompletionList, RegistryError> {
    debug!("Searching crates for {:?}", query);
    let crates = registry.search_crates(query).await?;

    Ok(CompletionList {
        is_incomplete: true,
        items: crates.iter().map(name_item).collect(),
    })
}

async fn lookup_versions(
    registry: &dyn Registry,
    crate_name: &str,
) -> Result<CompletionList, RegistryError> {
    debug!("Fetching versions for {}", crate_name);
    let versions = registry.fetch_versions(crate_name).await?;

    Ok(CompletionList {
        is_incomplete: false,
        items: version_items(versions),
    })
}

fn name_item(summary: &CrateSummary) -> CompletionItem {
    CompletionItem {
        label: summary.name.clone(),
        kind: Some(CompletionItemKind::PROPERTY),
        detail: summary.description.clone(),
        insert_text: Some(format!(
            "{} = \"${{1:{}}}\"",
            summary.name,
            summary.suggested_version()
        )),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..Default::default()
    }
}

fn version_items(versions: Vec<CrateVersion>) -> Vec<CompletionItem> {
    versions
        .into_iter()
        .filter(|version| !version.yanked)
        .enumerate()
        .map(|(index, version)| CompletionItem {
            label: version.num.clone(),
            kind: Some(CompletionItemKind::CONSTANT),
            sort_text: Some(format!("{:0width$}", index, width = SORT_TEXT_WIDTH)),
            insert_text: Some(version.num),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            ..Default::default()
        })
        .collect()
}
