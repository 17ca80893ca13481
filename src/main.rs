use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromascan::app;
use chromascan::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Records go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromascan=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Unlocked handles: worker threads may log to stderr while we wait
    let status = app::run(cli, &mut std::io::stdout(), &mut std::io::stderr()).await?;
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}
