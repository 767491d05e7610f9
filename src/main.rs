use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use quote_insights::cli::Commands;
use quote_insights::connector::web::WebServer;
use quote_insights::connector::{DEFAULT_BASE_URL, DEFAULT_QUOTE_URL};
use quote_insights::{Container, ContainerConfig, QuoteController, Router};

#[derive(Parser)]
#[command(name = "quote-insights")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Random-quote endpoint
    #[arg(long, global = true, env = "QUOTE_API_URL", default_value = DEFAULT_QUOTE_URL)]
    quote_url: String,

    /// Chat-completion API key; explanations are skipped when absent
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Chat-completion API base URL (without the /v1 suffix)
    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    openai_base_url: String,

    /// Timeout for a single explanation request, in seconds
    #[arg(long, global = true, env = "LLM_TIMEOUT_SECS", default_value = "60")]
    llm_timeout: u64,

    /// Use canned quotes and reflections instead of calling the network
    #[arg(long, global = true)]
    mock_services: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let container = Container::new(ContainerConfig {
        quote_url: cli.quote_url,
        openai_api_key: cli.openai_api_key,
        openai_base_url: cli.openai_base_url,
        llm_timeout: Duration::from_secs(cli.llm_timeout),
        mock_services: cli.mock_services,
    })?;

    match cli.command {
        Commands::Serve { bind, model } => {
            let controller = Arc::new(QuoteController::new(&container, model));
            WebServer::new(bind, controller).start().await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use quote_insights::ExplanationModel;

    #[test]
    fn discover_accepts_provider_model_ids() {
        let cli = Cli::try_parse_from(["quote-insights", "discover", "--model", "gpt-4o"]).unwrap();
        match cli.command {
            Commands::Discover { model } => assert_eq!(model, ExplanationModel::Full),
            _ => panic!("expected discover command"),
        }
    }

    #[test]
    fn unknown_model_is_rejected() {
        let res = Cli::try_parse_from(["quote-insights", "discover", "--model", "gpt-5"]);
        assert!(res.is_err(), "unknown models should not parse");
    }

    #[test]
    fn serve_binds_to_explicit_address() {
        let cli =
            Cli::try_parse_from(["quote-insights", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        match cli.command {
            Commands::Serve { bind, .. } => assert_eq!(bind.port(), 9000),
            _ => panic!("expected serve command"),
        }
    }
}
