mod aggregate;
mod api;
mod commands;
mod config;
mod models;
mod normalize;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;
use crate::output::Envelope;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();
    let format = cli.format;

    // Initialize tokio runtime
    let envelope = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_or_else(
            |e| Envelope::error(e.to_string()),
            |rt| rt.block_on(cli.execute()),
        );

    output::print(&envelope, format);

    // Every error envelope maps to a non-zero exit code
    if envelope.is_error() {
        std::process::exit(1);
    }
}
