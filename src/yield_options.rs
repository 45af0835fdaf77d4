//! Morpho yield options
//!
//! `YieldOption` is the record handed to the agent for each vault worth
//! depositing into. The Morpho GraphQL API is the production source; the
//! `YieldProvider` trait is the seam that lets tests substitute a mock.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::MORPHO_API_URL;
use crate::error::{Error, Result};
use crate::graphql::{self, morpho};

/// One opportunity to earn yield on a Morpho vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldOption {
    pub vault_address: String,
    pub name: String,
    pub symbol: String,
    pub asset_symbol: String,
    pub apy: f64,
    pub net_apy: f64,
    pub total_assets_usd: f64,
    pub rewards: Vec<YieldReward>,
}

/// Extra reward stream paid on top of a vault's native APY.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldReward {
    pub asset_symbol: String,
    pub supply_apr: f64,
}

impl YieldOption {
    /// Canonical JSON text form, as handed to the agent.
    pub fn to_canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Source of yield options for a chain.
#[async_trait]
pub trait YieldProvider: Send + Sync {
    /// List yield options available on the given chain, best first.
    async fn list_yield_options(&self, chain_id: u64) -> Result<Vec<YieldOption>>;
}

/// Yield provider backed by the Morpho GraphQL API.
pub struct MorphoYieldProvider {
    client: Client,
    endpoint: String,
}

impl MorphoYieldProvider {
    /// Create a provider against the production Morpho API.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: MORPHO_API_URL.to_string(),
        }
    }

    /// Create a provider against a non-default API endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        endpoint
            .parse::<url::Url>()
            .map_err(|e| Error::Config(format!("invalid Morpho API URL '{}': {}", endpoint, e)))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }
}

impl Default for MorphoYieldProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl YieldProvider for MorphoYieldProvider {
    async fn list_yield_options(&self, chain_id: u64) -> Result<Vec<YieldOption>> {
        let variables = json!({ "chainId": chain_id });

        tracing::debug!(chain_id = chain_id, "Querying Morpho vaults");
        let data = graphql::post_graphql(
            &self.client,
            &self.endpoint,
            morpho::VAULTS_BY_CHAIN,
            variables,
        )
        .await?;

        let response: VaultsData = serde_json::from_value(data)?;
        Ok(response
            .vaults
            .items
            .into_iter()
            .map(YieldOption::from)
            .collect())
    }
}

// Typed shells for the Morpho API response. Unknown fields are ignored so
// additive API changes don't break deserialization.

#[derive(Debug, Deserialize)]
struct VaultsData {
    vaults: VaultPage,
}

#[derive(Debug, Deserialize)]
struct VaultPage {
    items: Vec<VaultItem>,
}

#[derive(Debug, Deserialize)]
struct VaultItem {
    address: String,
    name: String,
    symbol: String,
    asset: VaultAsset,
    state: VaultState,
}

#[derive(Debug, Deserialize)]
struct VaultAsset {
    symbol: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VaultState {
    apy: f64,
    net_apy: f64,
    total_assets_usd: Option<f64>,
    #[serde(default)]
    rewards: Vec<VaultReward>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VaultReward {
    asset: VaultAsset,
    supply_apr: f64,
}

impl From<VaultItem> for YieldOption {
    fn from(item: VaultItem) -> Self {
        Self {
            vault_address: item.address,
            name: item.name,
            symbol: item.symbol,
            asset_symbol: item.asset.symbol,
            apy: item.state.apy,
            net_apy: item.state.net_apy,
            total_assets_usd: item.state.total_assets_usd.unwrap_or_default(),
            rewards: item
                .state
                .rewards
                .into_iter()
                .map(|r| YieldReward {
                    asset_symbol: r.asset.symbol,
                    supply_apr: r.supply_apr,
                })
                .collect(),
        }
    }
}
