//! Uniswap token analytics tool
//!
//! Fetches the full token record, including whitelist pools and their
//! token0/token1 sub-records, from the Uniswap V3 subgraph using the fixed
//! `GetToken` query.

use std::str::FromStr;

use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::{Network, SubgraphEndpoints};
use crate::error::{Error, Result};
use crate::graphql::{self, uniswap};
use crate::tools::AgentTool;

/// Tool for querying Uniswap V3 token analytics from The Graph
pub struct TokenAnalyticsTool {
    client: Client,
    endpoints: SubgraphEndpoints,
}

impl TokenAnalyticsTool {
    /// Create a new TokenAnalyticsTool with default endpoints
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoints: SubgraphEndpoints::default(),
        }
    }

    /// Create with custom endpoints
    pub fn with_endpoints(endpoints: SubgraphEndpoints) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    /// Fetch the token record for `token_address` on `network`.
    pub async fn get_token(&self, network: Network, token_address: &str) -> Result<Value> {
        let endpoint = self.endpoints.endpoints.get(&network).ok_or_else(|| {
            Error::Config(format!(
                "No Uniswap V3 endpoint configured for {}",
                network.name()
            ))
        })?;

        let address = Address::from_str(token_address)
            .map_err(|e| Error::InvalidArgument(format!("Invalid token address: {}", e)))?;

        // Subgraph token ids are lowercase hex
        let variables = json!({ "tokenAddress": address.to_string().to_lowercase() });

        tracing::debug!(network = network.name(), token = %address, "Querying token analytics");
        let data =
            graphql::post_graphql(&self.client, endpoint, uniswap::GET_TOKEN, variables).await?;

        Ok(json!({
            "network": network.name(),
            "tokens": data.get("tokens").cloned().unwrap_or(json!([]))
        }))
    }

    fn parse_network(s: &str) -> Result<Network> {
        Network::from_name(s).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "Unknown network: {}. Supported: base, ethereum, arbitrum, optimism",
                s
            ))
        })
    }
}

impl Default for TokenAnalyticsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentTool for TokenAnalyticsTool {
    const NAME: &'static str = "token_analytics";

    fn description(&self) -> &'static str {
        "Fetches Uniswap V3 analytics for a token: supply, volume, fees, \
         total value locked, derived price, and its whitelisted pools."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "token_address": {
                    "type": "string",
                    "description": "Token contract address"
                },
                "network": {
                    "type": "string",
                    "enum": ["base", "ethereum", "arbitrum", "optimism"],
                    "description": "The blockchain network (default: base)"
                }
            },
            "required": ["token_address"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let token_address = args
            .get("token_address")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::InvalidArgument("Missing 'token_address' field".to_string()))?;

        let network = match args.get("network").and_then(|v| v.as_str()) {
            Some(name) => Self::parse_network(name)?,
            None => Network::Base,
        };

        self.get_token(network, token_address).await
    }
}
