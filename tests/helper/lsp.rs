//! LSP request/notification test utilities

use std::time::Duration;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tower::Service;
use tower_lsp::jsonrpc::{Request, Response};
use tower_lsp::lsp_types::*;
use tower_lsp::{ClientSocket, LspService};

use crate_completion_lsp::lsp::backend::Backend;

/// Create an LSP initialize request
pub fn create_initialize_request(id: i64) -> Request {
    create_initialize_request_with_options(id, None)
}

/// Create an LSP initialize request carrying `initializationOptions`
pub fn create_initialize_request_with_options(
    id: i64,
    options: Option<serde_json::Value>,
) -> Request {
    Request::build("initialize")
        .id(id)
        .params(
            serde_json::to_value(InitializeParams {
                initialization_options: options,
                ..Default::default()
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP initialized notification
pub fn create_initialized_notification() -> Request {
    Request::build("initialized")
        .params(serde_json::to_value(InitializedParams {}).unwrap())
        .finish()
}

/// Create an LSP didOpen notification
pub fn create_did_open_notification(uri: &str, content: &str) -> Request {
    Request::build("textDocument/didOpen")
        .params(
            serde_json::to_value(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: uri.parse().unwrap(),
                    language_id: "toml".to_string(),
                    version: 1,
                    text: content.to_string(),
                },
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP didChange notification
pub fn create_did_change_notification(uri: &str, content: &str, version: i32) -> Request {
    Request::build("textDocument/didChange")
        .params(
            serde_json::to_value(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: uri.parse().unwrap(),
                    version,
                },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: content.to_string(),
                }],
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP didClose notification
pub fn create_did_close_notification(uri: &str) -> Request {
    Request::build("textDocument/didClose")
        .params(
            serde_json::to_value(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier {
                    uri: uri.parse().unwrap(),
                },
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP completion request
pub fn create_completion_request(id: i64, uri: &str, line: u32, character: u32) -> Request {
    Request::build("textDocument/completion")
        .id(id)
        .params(
            serde_json::to_value(CompletionParams {
                text_document_position: TextDocumentPositionParams {
                    text_document: TextDocumentIdentifier {
                        uri: uri.parse().unwrap(),
                    },
                    position: Position { line, character },
                },
                work_done_progress_params: Default::default(),
                partial_result_params: Default::default(),
                context: None,
            })
            .unwrap(),
        )
        .finish()
}

/// Collect notifications in background and return a receiver
pub fn spawn_notification_collector(mut socket: ClientSocket) -> mpsc::Receiver<Request> {
    let (tx, rx) = mpsc::channel(100);

    tokio::spawn(async move {
        while let Some(notification) = socket.next().await {
            if tx.send(notification).await.is_err() {
                break;
            }
        }
    });

    rx
}

/// Wait for a notification with the specified method name from the receiver
pub async fn wait_for_notification(
    rx: &mut mpsc::Receiver<Request>,
    method: &str,
) -> Option<Request> {
    let timeout_duration = Duration::from_secs(5);

    loop {
        match timeout(timeout_duration, rx.recv()).await {
            Ok(Some(notification)) => {
                if notification.method() == method {
                    return Some(notification);
                }
                // Skip other notifications (like log_message)
            }
            _ => return None,
        }
    }
}

/// Initialize the service and open `content` at `uri`
pub async fn initialize_and_open(
    service: &mut LspService<Backend>,
    uri: &str,
    content: &str,
) {
    let init_response = service.call(create_initialize_request(1)).await.unwrap();
    assert!(init_response.is_some());

    service
        .call(create_initialized_notification())
        .await
        .unwrap();

    service
        .call(create_did_open_notification(uri, content))
        .await
        .unwrap();
}

/// Send a completion request and decode the result into a `CompletionList`
pub async fn request_completion(
    service: &mut LspService<Backend>,
    id: i64,
    uri: &str,
    line: u32,
    character: u32,
) -> Result<CompletionList, tower_lsp::jsonrpc::Error> {
    let response = service
        .call(create_completion_request(id, uri, line, character))
        .await
        .unwrap()
        .expect("completion request must produce a response");

    decode_completion(response)
}

fn decode_completion(response: Response) -> Result<CompletionList, tower_lsp::jsonrpc::Error> {
    let (_, body) = response.into_parts();
    let value = body?;

    match serde_json::from_value::<CompletionResponse>(value).unwrap() {
        CompletionResponse::List(list) => Ok(list),
        CompletionResponse::Array(items) => Ok(CompletionList {
            is_incomplete: false,
            items,
        }),
    }
}
