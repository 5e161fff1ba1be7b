//! Command-line interface for inferd

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::artifact::LinearModel;
use crate::server::{run_server, LoadMode, ServerConfig};

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "inferd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minimal model-serving HTTP service")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction server
    Serve {
        /// Server port
        #[arg(short, long)]
        port: Option<u16>,

        /// Server host
        #[arg(long)]
        host: Option<String>,

        /// Model artifact file (JSON)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Input schema (features, air_quality)
        #[arg(long)]
        schema: Option<String>,

        /// Start even if the artifact fails to load; /predict returns 503
        #[arg(long)]
        lenient: bool,
    },

    /// Print artifact metadata
    Inspect {
        /// Model artifact file (JSON)
        #[arg(short, long)]
        model: PathBuf,
    },
}

/// Overrides applied on top of the env-derived default configuration
#[derive(Debug, Default)]
pub struct ServeArgs {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub model: Option<PathBuf>,
    pub schema: Option<String>,
    pub lenient: bool,
}

// ─── Serve ─────────────────────────────────────────────────────────────────────

pub async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServerConfig::default();

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(model) = args.model {
        config.model_path = model;
    }
    if let Some(schema) = args.schema {
        config.schema = schema.parse()?;
    }
    if args.lenient {
        config.load_mode = LoadMode::Lenient;
    }

    run_server(config).await
}

// ─── Inspect ───────────────────────────────────────────────────────────────────

pub fn cmd_inspect(path: &Path) -> anyhow::Result<()> {
    let model = LinearModel::load(path)?;

    println!("Artifact: {}", path.display());
    println!("  features:  {}", model.n_features());
    println!("  intercept: {}", model.intercept);
    if model.feature_names().is_empty() {
        println!("  names:     (positional)");
    } else {
        println!("  names:     {}", model.feature_names().join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_args_override_defaults() {
        let cli = Cli::parse_from([
            "inferd", "serve", "--port", "9000", "--model", "/tmp/m.json", "--lenient",
        ]);
        match cli.command {
            Some(Commands::Serve { port, model, lenient, .. }) => {
                assert_eq!(port, Some(9000));
                assert_eq!(model, Some(PathBuf::from("/tmp/m.json")));
                assert!(lenient);
            }
            _ => panic!("expected serve subcommand"),
        }
    }

    #[test]
    fn test_inspect_missing_model_errors() {
        assert!(cmd_inspect(Path::new("/nonexistent/model.json")).is_err());
    }
}
