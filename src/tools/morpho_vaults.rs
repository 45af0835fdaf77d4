//! Morpho vault listing tool
//!
//! Lists vaults for achieving yield that are hosted on the Morpho protocol
//! and renders them as a single string for the agent. Morpho vault listing
//! is only available on Base; any other wallet network fails up front,
//! before the provider is contacted.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Network;
use crate::error::{Error, Result};
use crate::tools::AgentTool;
use crate::yield_options::{MorphoYieldProvider, YieldProvider};

const OUTPUT_PREFIX: &str = "Available vaults are here in a json list: ";

/// Tool that lists Morpho yield vaults for the agent's wallet network.
pub struct MorphoListVaultsTool {
    provider: Arc<dyn YieldProvider>,
}

impl MorphoListVaultsTool {
    /// Create a tool backed by the production Morpho API.
    pub fn new() -> Self {
        Self {
            provider: Arc::new(MorphoYieldProvider::new()),
        }
    }

    /// Create with a custom yield provider.
    pub fn with_provider(provider: Arc<dyn YieldProvider>) -> Self {
        Self { provider }
    }

    /// List yield vaults for the given wallet network id.
    ///
    /// Fails with [`Error::UnsupportedNetwork`] for anything other than
    /// `base-mainnet`. Provider order is preserved in the rendered output.
    pub async fn list_yield_vaults(&self, network_id: &str) -> Result<String> {
        let chain_id = match Network::from_network_id(network_id) {
            Some(Network::Base) => Network::Base.chain_id(),
            _ => return Err(Error::UnsupportedNetwork(network_id.to_string())),
        };

        let options = self.provider.list_yield_options(chain_id).await?;

        let mut serialized = Vec::with_capacity(options.len());
        for option in &options {
            serialized.push(option.to_canonical_json()?);
        }

        Ok(render_vault_list(&serialized))
    }
}

impl Default for MorphoListVaultsTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Render serialized vault records as the agent-facing result string.
fn render_vault_list(serialized: &[String]) -> String {
    let entries: Vec<String> = serialized.iter().map(|s| format!("'{}'", s)).collect();
    format!("{}[{}]", OUTPUT_PREFIX, entries.join(", "))
}

#[async_trait]
impl AgentTool for MorphoListVaultsTool {
    const NAME: &'static str = "morpho_list_vaults";

    fn description(&self) -> &'static str {
        "Lists vaults for achieving yield that are hosted on the Morpho protocol. \
         Each vault comes with details about its APY and rewards. \
         Only supported on the base-mainnet network."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "network": {
                    "type": "string",
                    "description": "Wallet network id, e.g. 'base-mainnet'"
                }
            },
            "required": ["network"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let network_id = args
            .get("network")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::InvalidArgument("Missing 'network' field".to_string()))?;

        let output = self.list_yield_vaults(network_id).await?;
        Ok(Value::String(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yield_options::{YieldOption, YieldReward};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockProvider {
        calls: AtomicUsize,
        seen_chain_ids: Mutex<Vec<u64>>,
        result: std::result::Result<Vec<YieldOption>, String>,
    }

    impl MockProvider {
        fn returning(options: Vec<YieldOption>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen_chain_ids: Mutex::new(Vec::new()),
                result: Ok(options),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen_chain_ids: Mutex::new(Vec::new()),
                result: Err(message.to_string()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl YieldProvider for MockProvider {
        async fn list_yield_options(&self, chain_id: u64) -> Result<Vec<YieldOption>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_chain_ids.lock().unwrap().push(chain_id);
            match &self.result {
                Ok(options) => Ok(options.clone()),
                Err(message) => Err(Error::GraphQL(message.clone())),
            }
        }
    }

    fn option(name: &str, apy: f64) -> YieldOption {
        YieldOption {
            vault_address: "0xbeef010f9cb27031ad51e3333f9af9c6b1228183".to_string(),
            name: name.to_string(),
            symbol: "steakUSDC".to_string(),
            asset_symbol: "USDC".to_string(),
            apy,
            net_apy: apy - 0.003,
            total_assets_usd: 1_000_000.0,
            rewards: vec![YieldReward {
                asset_symbol: "MORPHO".to_string(),
                supply_apr: 0.01,
            }],
        }
    }

    #[tokio::test]
    async fn supported_network_calls_provider_once_with_base_chain_id() {
        let provider = Arc::new(MockProvider::returning(vec![option("Steakhouse USDC", 0.07)]));
        let tool = MorphoListVaultsTool::with_provider(provider.clone());

        tool.list_yield_vaults("base-mainnet").await.expect("ok");

        assert_eq!(provider.call_count(), 1);
        assert_eq!(*provider.seen_chain_ids.lock().unwrap(), vec![8453]);
    }

    #[tokio::test]
    async fn unsupported_network_fails_without_calling_provider() {
        let provider = Arc::new(MockProvider::returning(vec![]));
        let tool = MorphoListVaultsTool::with_provider(provider.clone());

        let err = tool
            .list_yield_vaults("ethereum-mainnet")
            .await
            .expect_err("must fail");

        assert!(matches!(err, Error::UnsupportedNetwork(ref id) if id == "ethereum-mainnet"));
        assert!(err.to_string().contains("ethereum-mainnet"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_network_id_fails_the_same_way() {
        let provider = Arc::new(MockProvider::returning(vec![]));
        let tool = MorphoListVaultsTool::with_provider(provider.clone());

        let err = tool
            .list_yield_vaults("solana-mainnet")
            .await
            .expect_err("must fail");

        assert!(matches!(err, Error::UnsupportedNetwork(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_provider_result_renders_empty_list() {
        let provider = Arc::new(MockProvider::returning(vec![]));
        let tool = MorphoListVaultsTool::with_provider(provider);

        let output = tool.list_yield_vaults("base-mainnet").await.expect("ok");
        assert_eq!(output, "Available vaults are here in a json list: []");
    }

    #[tokio::test]
    async fn output_preserves_provider_order() {
        let first = option("Steakhouse USDC", 0.07);
        let second = option("Moonwell Flagship ETH", 0.03);
        let provider = Arc::new(MockProvider::returning(vec![first.clone(), second.clone()]));
        let tool = MorphoListVaultsTool::with_provider(provider);

        let output = tool.list_yield_vaults("base-mainnet").await.expect("ok");

        let expected = format!(
            "Available vaults are here in a json list: ['{}', '{}']",
            first.to_canonical_json().unwrap(),
            second.to_canonical_json().unwrap(),
        );
        assert_eq!(output, expected);
    }

    #[tokio::test]
    async fn provider_errors_propagate_unchanged() {
        let provider = Arc::new(MockProvider::failing("morpho api down"));
        let tool = MorphoListVaultsTool::with_provider(provider.clone());

        let err = tool
            .list_yield_vaults("base-mainnet")
            .await
            .expect_err("must fail");

        assert!(matches!(err, Error::GraphQL(ref msg) if msg == "morpho api down"));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn execute_requires_network_arg() {
        let provider = Arc::new(MockProvider::returning(vec![]));
        let tool = MorphoListVaultsTool::with_provider(provider);

        let err = tool.execute(json!({})).await.expect_err("must fail");
        assert!(matches!(err, Error::InvalidArgument(_)));

        let ok = tool
            .execute(json!({ "network": "base-mainnet" }))
            .await
            .expect("ok");
        assert!(ok.as_str().unwrap().starts_with(OUTPUT_PREFIX));
    }

    #[test]
    fn render_matches_agent_contract() {
        let serialized = vec![r#"{"apy":0.05}"#.to_string(), r#"{"apy":0.07}"#.to_string()];
        assert_eq!(
            render_vault_list(&serialized),
            r#"Available vaults are here in a json list: ['{"apy":0.05}', '{"apy":0.07}']"#
        );
        assert_eq!(
            render_vault_list(&[]),
            "Available vaults are here in a json list: []"
        );
    }

    #[test]
    fn input_schema_declares_network() {
        let provider = Arc::new(MockProvider::returning(vec![]));
        let tool = MorphoListVaultsTool::with_provider(provider);
        let schema = tool.input_schema();

        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["network"].is_object());
    }
}
