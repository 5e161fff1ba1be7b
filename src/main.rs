//! inferd - Main entry point

use clap::Parser;
use inferd::cli::{cmd_inspect, cmd_serve, Cli, Commands, ServeArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inferd=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, host, model, schema, lenient }) => {
            cmd_serve(ServeArgs { port, host, model, schema, lenient }).await?;
        }
        Some(Commands::Inspect { model }) => {
            cmd_inspect(&model)?;
        }
        None => {
            // Default: serve with env-derived configuration
            cmd_serve(ServeArgs::default()).await?;
        }
    }

    Ok(())
}
