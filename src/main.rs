use clap::Parser;

use crate_completion_lsp::config::DEFAULT_REGISTRY_URL;

#[derive(Parser)]
#[command(name = "crate-completion-lsp")]
#[command(version, about = "Language Server for crate name and version completion in Cargo.toml")]
struct Cli {
    /// Base URL of the crates.io-compatible registry API
    #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
    registry_url: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(crate_completion_lsp::lsp::server::run_server(
            cli.registry_url,
        ));

    Ok(())
}
