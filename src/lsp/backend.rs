use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, error, info};

use crate::config::LspConfig;
use crate::lsp::completion::{empty_list, provide_completions};
use crate::lsp::documents::DocumentStore;
use crate::parser::cargo_toml::CargoTomlContext;
use crate::parser::types::is_cargo_manifest;
use crate::registry::{CratesIoRegistry, Registry, RegistryError};

pub struct Backend {
    client: Client,
    registry: Arc<dyn Registry>,
    context: CargoTomlContext,
    documents: DocumentStore,
    config: RwLock<LspConfig>,
}

impl Backend {
    /// Create a Backend talking to the registry at `registry_url`
    pub fn new(client: Client, registry_url: &str) -> Self {
        Self::build(client, Arc::new(CratesIoRegistry::new(registry_url)))
    }

    /// Build a Backend with a custom registry
    pub fn build(client: Client, registry: Arc<dyn Registry>) -> Self {
        Self {
            client,
            registry,
            context: CargoTomlContext::new(),
            documents: DocumentStore::new(),
            config: RwLock::new(LspConfig::default()),
        }
    }

    pub fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    ..Default::default()
                },
            )),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(vec!["\"".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    async fn complete(&self, uri: &Url, position: Position) -> Result<CompletionList> {
        if !is_cargo_manifest(uri.as_str()) {
            return Ok(empty_list());
        }

        let Some(content) = self.documents.get(uri).await else {
            debug!("Completion requested for unknown document {}", uri);
            return Ok(empty_list());
        };

        let config = self.config.read().await.completion.clone();

        provide_completions(
            &self.context,
            &*self.registry,
            &config,
            &content,
            position,
        )
        .await
        .map_err(|e| {
            error!(
                "Completion failed at {}:{}:{}: {}",
                uri, position.line, position.character, e
            );
            registry_error_to_rpc(e)
        })
    }
}

fn registry_error_to_rpc(e: RegistryError) -> Error {
    Error {
        code: ErrorCode::InternalError,
        message: e.to_string().into(),
        data: None,
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let config = LspConfig::from_init_options(params.initialization_options);
        info!("Initializing with {:?}", config);
        *self.config.write().await = config;

        self.client
            .log_message(MessageType::INFO, "LSP server initializing")
            .await;
        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "crate-completion-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.client
            .log_message(MessageType::INFO, "LSP server shutting down")
            .await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.client
            .log_message(
                MessageType::LOG,
                format!("Document opened: {}", params.text_document.uri),
            )
            .await;

        self.documents
            .open(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // With FULL sync mode, the last content change contains the full document text
        let Some(content) = params.content_changes.into_iter().last().map(|c| c.text) else {
            return;
        };

        self.documents
            .update(params.text_document.uri, content)
            .await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close(&params.text_document.uri).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let TextDocumentPositionParams {
            text_document,
            position,
        } = params.text_document_position;

        let list = self.complete(&text_document.uri, position).await?;

        debug!(
            "Returning {} completion items for {}",
            list.items.len(),
            text_document.uri
        );
        Ok(Some(CompletionResponse::List(list)))
    }
}
