//! In-memory text of open documents, kept in sync by the client

use std::collections::HashMap;

use tokio::sync::RwLock;
use tower_lsp::lsp_types::Url;

#[derive(Default)]
pub struct DocumentStore {
    documents: RwLock<HashMap<Url, String>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, uri: Url, text: String) {
        self.documents.write().await.insert(uri, text);
    }

    /// Replace the full text (FULL sync)
    pub async fn update(&self, uri: Url, text: String) {
        self.documents.write().await.insert(uri, text);
    }

    pub async fn close(&self, uri: &Url) {
        self.documents.write().await.remove(uri);
    }

    /// Snapshot of the current text, so no lock is held across a registry call
    pub async fn get(&self, uri: &Url) -> Option<String> {
        self.documents.read().await.get(uri).cloned()
    }
}
