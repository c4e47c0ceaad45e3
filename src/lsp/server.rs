//! LSP server initialization and lifecycle

use tower_lsp::{LspService, Server};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::log_path;
use crate::lsp::backend::Backend;

/// Install a file-backed tracing subscriber; stdout carries the protocol.
///
/// The returned guard flushes buffered log lines when dropped.
fn init_logging() -> Option<WorkerGuard> {
    let path = log_path();
    let dir = path.parent()?;
    let file_name = path.file_name()?;

    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create log directory {:?}: {}", dir, e);
        return None;
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    if initialized.is_err() {
        warn!("Tracing subscriber already installed");
    }

    Some(guard)
}

/// Serve the language server over stdin/stdout until the client exits
pub async fn run_server(registry_url: String) {
    let _guard = init_logging();
    info!("Starting crate-completion-lsp with registry {}", registry_url);

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| Backend::new(client, &registry_url));
    Server::new(stdin, stdout, socket).serve(service).await;

    info!("crate-completion-lsp stopped");
}
