//! Tool implementations for the yield agent
//!
//! Tools follow the name/description/input-schema/execute shape the agent
//! platform dispatches on. The platform itself lives outside this crate; it
//! only needs the `AgentTool` surface and the registry names below.

mod morpho_vaults;
mod token_analytics;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use morpho_vaults::MorphoListVaultsTool;
pub use token_analytics::TokenAnalyticsTool;

/// Interface every agent tool implements.
#[async_trait]
pub trait AgentTool: Send + Sync {
    /// Tool name the agent calls it by.
    const NAME: &'static str;

    /// Human/LLM-readable description of what the tool does.
    fn description(&self) -> &'static str;

    /// JSON schema for the tool's arguments.
    fn input_schema(&self) -> Value;

    /// Run the tool with JSON arguments.
    async fn execute(&self, args: Value) -> Result<Value>;
}

pub const TOOL_MORPHO_LIST_VAULTS: &str = "defi/morpho_list_vaults";
pub const TOOL_TOKEN_ANALYTICS: &str = "defi/token_analytics";
