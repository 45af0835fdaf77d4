//! Error types for the yield agent tools

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported network '{0}', only base-mainnet is supported")]
    UnsupportedNetwork(String),

    #[error("GraphQL query failed: {0}")]
    GraphQL(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
