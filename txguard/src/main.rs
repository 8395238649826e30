// txguard/src/main.rs

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use txguard_core::infrastructure::config::{LogFormat, Settings, load_settings};

mod cli;
mod commands;
mod http;

use cli::{Cli, Commands};

fn init_tracing(format: LogFormat) {
    // RUST_LOG=debug txguard validate ... to see rule timings
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "txguard=info,txguard_core=info,tower_http=info".into());

    // Logs go to stderr so that reports on stdout stay machine-readable
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings: Settings = load_settings(&cli.config_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load settings from {}: {}",
            cli.config_dir.display(),
            e
        )
    })?;
    init_tracing(settings.log_format);

    match cli.command {
        Commands::Validate { file, format } => commands::validate::execute(file, format, &settings),
        Commands::Serve { host, port } => commands::serve::execute(settings, host, port).await,
        Commands::Rules => commands::rules::execute(),
    }
}
