//! Morpho API query templates

/// Whitelisted vaults for one chain, largest first.
pub const VAULTS_BY_CHAIN: &str = r#"query VaultsByChain($chainId: Int!) {
  vaults(
    where: { chainId_in: [$chainId], whitelisted: true }
    orderBy: TotalAssetsUsd
    orderDirection: Desc
  ) {
    items {
      address
      name
      symbol
      asset {
        address
        symbol
        decimals
      }
      state {
        apy
        netApy
        totalAssetsUsd
        rewards {
          asset {
            symbol
          }
          supplyApr
        }
      }
    }
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vaults_query_binds_chain_id() {
        assert!(VAULTS_BY_CHAIN.starts_with("query VaultsByChain($chainId: Int!)"));
        assert!(VAULTS_BY_CHAIN.contains("chainId_in: [$chainId]"));
        assert!(VAULTS_BY_CHAIN.contains("whitelisted: true"));
    }
}
