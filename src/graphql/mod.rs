//! GraphQL transport and query templates
//!
//! Query templates are stored as raw strings and posted verbatim with their
//! variables. The templates are part of the wire contract with the external
//! services, so they are plain constants rather than generated code.

pub mod morpho;
pub mod uniswap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<Value>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Execute a raw GraphQL query and return the `data` payload.
pub async fn post_graphql(
    client: &Client,
    endpoint: &str,
    query: &str,
    variables: Value,
) -> Result<Value> {
    let response = client
        .post(endpoint)
        .json(&json!({
            "query": query,
            "variables": variables
        }))
        .send()
        .await?;

    let result: GraphQlResponse = response.json().await?;

    if let Some(errors) = result.errors {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(Error::GraphQL(messages.join(", ")));
    }

    result
        .data
        .ok_or_else(|| Error::GraphQL("no data in response".to_string()))
}
