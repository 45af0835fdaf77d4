//! Configuration for the yield agent tools

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The Graph API key environment variable name
pub const GRAPH_API_KEY_ENV: &str = "GRAPH_API_KEY";

/// Morpho GraphQL API endpoint
pub const MORPHO_API_URL: &str = "https://blue-api.morpho.org/graphql";

/// Supported blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Base,
    Ethereum,
    Arbitrum,
    Optimism,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Base => 8453,
            Network::Ethereum => 1,
            Network::Arbitrum => 42161,
            Network::Optimism => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Base => "base",
            Network::Ethereum => "ethereum",
            Network::Arbitrum => "arbitrum",
            Network::Optimism => "optimism",
        }
    }

    /// Wallet-SDK network identifier, e.g. `base-mainnet`
    pub fn network_id(&self) -> &'static str {
        match self {
            Network::Base => "base-mainnet",
            Network::Ethereum => "ethereum-mainnet",
            Network::Arbitrum => "arbitrum-mainnet",
            Network::Optimism => "optimism-mainnet",
        }
    }

    /// Resolve a wallet-SDK network identifier (`base-mainnet`, ...)
    pub fn from_network_id(network_id: &str) -> Option<Network> {
        match network_id {
            "base-mainnet" => Some(Network::Base),
            "ethereum-mainnet" => Some(Network::Ethereum),
            "arbitrum-mainnet" => Some(Network::Arbitrum),
            "optimism-mainnet" => Some(Network::Optimism),
            _ => None,
        }
    }

    /// Resolve a short network name (`base`, `ethereum`, ...)
    pub fn from_name(name: &str) -> Option<Network> {
        match name.to_lowercase().as_str() {
            "base" => Some(Network::Base),
            "ethereum" | "mainnet" => Some(Network::Ethereum),
            "arbitrum" => Some(Network::Arbitrum),
            "optimism" => Some(Network::Optimism),
            _ => None,
        }
    }
}

/// The Graph subgraph IDs for the decentralized network
pub struct SubgraphIds;

impl SubgraphIds {
    /// Uniswap V3 subgraph IDs on The Graph decentralized network
    pub const UNISWAP_V3_ETHEREUM: &'static str = "5zvR82QoaXYFyDEKLZ9t6v9adgnptxYpKpSbxtgVENFV";
    pub const UNISWAP_V3_ARBITRUM: &'static str = "FbCGRftH4a3yZugY7TnbYgPJVEv2LvMT6oF1fxPe9aJM";
    pub const UNISWAP_V3_OPTIMISM: &'static str = "Cghf4LfVqPiFw6fp6Y5X5Ubc8UpmUhSfJL82zwiBFLaj";
    pub const UNISWAP_V3_BASE: &'static str = "43Hwfi3dJSoGpyas9VwNoDAv28pNwMgNGVi8CKNS9r6R";
}

/// Uniswap V3 subgraph endpoints, keyed by network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgraphEndpoints {
    pub endpoints: HashMap<Network, String>,
}

impl SubgraphEndpoints {
    /// Build endpoints using The Graph decentralized network with API key
    pub fn with_api_key(api_key: &str) -> Self {
        let mut endpoints = HashMap::new();

        for (network, subgraph_id) in [
            (Network::Base, SubgraphIds::UNISWAP_V3_BASE),
            (Network::Ethereum, SubgraphIds::UNISWAP_V3_ETHEREUM),
            (Network::Arbitrum, SubgraphIds::UNISWAP_V3_ARBITRUM),
            (Network::Optimism, SubgraphIds::UNISWAP_V3_OPTIMISM),
        ] {
            endpoints.insert(
                network,
                format!(
                    "https://gateway.thegraph.com/api/{}/subgraphs/id/{}",
                    api_key, subgraph_id
                ),
            );
        }

        Self { endpoints }
    }

    /// Try to build endpoints from GRAPH_API_KEY environment variable
    pub fn from_env() -> Option<Self> {
        std::env::var(GRAPH_API_KEY_ENV)
            .ok()
            .map(|key| Self::with_api_key(&key))
    }
}

impl Default for SubgraphEndpoints {
    fn default() -> Self {
        // Requires GRAPH_API_KEY to be set; placeholder otherwise
        Self::from_env().unwrap_or_else(|| {
            let mut endpoints = HashMap::new();
            endpoints.insert(
                Network::Base,
                format!(
                    "https://gateway.thegraph.com/api/YOUR_API_KEY/subgraphs/id/{}",
                    SubgraphIds::UNISWAP_V3_BASE
                ),
            );
            Self { endpoints }
        })
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Network the agent wallet operates on
    pub default_network: Network,
    /// Morpho GraphQL API endpoint
    pub morpho_api_url: String,
    /// Uniswap V3 subgraph endpoints
    pub subgraphs: SubgraphEndpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_network: Network::Base,
            morpho_api_url: MORPHO_API_URL.to_string(),
            subgraphs: SubgraphEndpoints::default(),
        }
    }
}
