//! DeFi Yield Agent Tools
//!
//! Agent-facing tools for an LLM trading agent:
//! - List Morpho vault yield opportunities for the wallet's network
//! - Fetch Uniswap V3 token analytics from The Graph
//!
//! Tool results are rendered as text/JSON for the language-model agent to
//! consume. Network support is encoded in the [`config::Network`] enum, so
//! unsupported-network handling is exhaustive rather than string matching
//! scattered through the tools.

pub mod config;
pub mod graphql;
pub mod tools;
pub mod yield_options;

mod error;

// Re-export commonly used types
pub use config::{Config, Network, GRAPH_API_KEY_ENV, MORPHO_API_URL};
pub use error::{Error, Result};
pub use yield_options::{MorphoYieldProvider, YieldOption, YieldProvider, YieldReward};
