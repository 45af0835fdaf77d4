//! Yield Agent CLI
//!
//! Command-line interface for exercising the agent tools directly.

use clap::{Parser, Subcommand};
use defi_yield_agent::{Config, Error, Network, Result};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "yield-agent")]
#[command(about = "Morpho yield and Uniswap token analytics tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List Morpho yield vaults for a wallet network
    Vaults {
        /// Wallet network id (e.g. base-mainnet)
        #[arg(short, long, default_value = "base-mainnet")]
        network: String,
    },

    /// Fetch Uniswap token analytics
    Token {
        /// Token contract address
        #[arg(short, long)]
        address: String,

        /// Network (base, ethereum, arbitrum, optimism)
        #[arg(short, long, default_value = "base")]
        network: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load config
    let config = if let Some(config_path) = cli.config {
        let content =
            std::fs::read_to_string(&config_path).map_err(|e| Error::Config(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| Error::Config(e.to_string()))?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Vaults { network } => {
            run_vaults(network, &config).await?;
        }
        Commands::Token { address, network } => {
            run_token(address, network, &config).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn run_vaults(network: String, config: &Config) -> Result<()> {
    use defi_yield_agent::tools::MorphoListVaultsTool;
    use defi_yield_agent::MorphoYieldProvider;
    use std::sync::Arc;

    tracing::info!(network = %network, "Listing Morpho vaults");

    let provider = MorphoYieldProvider::with_endpoint(config.morpho_api_url.as_str())?;
    let tool = MorphoListVaultsTool::with_provider(Arc::new(provider));

    let output = tool.list_yield_vaults(&network).await?;
    println!("{}", output);
    Ok(())
}

async fn run_token(address: String, network: String, config: &Config) -> Result<()> {
    use defi_yield_agent::tools::TokenAnalyticsTool;

    let network = Network::from_name(&network)
        .ok_or_else(|| Error::InvalidArgument(format!("Unknown network: {}", network)))?;

    tracing::info!(network = network.name(), token = %address, "Fetching token analytics");

    let tool = TokenAnalyticsTool::with_endpoints(config.subgraphs.clone());
    let result = tool.get_token(network, &address).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
