//! User Hours API - HTTP server for the in-memory user store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "user-hours-api")]
#[command(about = "In-memory user and hours tracking API")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind (defaults to 0.0.0.0)
        #[arg(long, env = "API_HOST")]
        host: Option<String>,
        /// Port to bind (defaults to 5012)
        #[arg(long, env = "API_PORT")]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    let mut config = ApiConfig::from_env();
    tracing::debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            api_lib::run_server(config).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tower_http=debug".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_flags_override_config() {
        let cli = Cli::try_parse_from([
            "user-hours-api",
            "-v",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
        ])
        .unwrap();
        assert!(cli.verbose);

        let Commands::Serve { host, port } = cli.command;
        assert_eq!(host.as_deref(), Some("127.0.0.1"));
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn serve_rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["user-hours-api", "serve", "--port", "http"]).is_err());
    }
}
