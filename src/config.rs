// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! # Sweeper Configuration
//!
//! Deployment configuration is a TOML document supplied by the embedding
//! process at startup. The engine treats it as read-only for the process
//! lifetime.
//!
//! ```toml
//! destination = "0x000000000000000000000000000000000000dEaD"
//!
//! [[chains]]
//! id = "eth"
//! name = "Ethereum Mainnet"
//! chain_id = 1
//! rpc_url = "https://eth.example.org/rpc"
//! explorer_url = "https://etherscan.io"
//! reserve_wei = 420000000000000
//! tokens = [
//!     "0xdAC17F958D2ee523a2206206994597C13D831ec7",
//!     "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
//! ]
//! ```

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::chain::ChainConfig;
use crate::error::SweepError;

/// Top-level sweeper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweeperConfig {
    /// Account all swept assets are sent to.
    pub destination: Address,
    /// Chains this deployment can sweep on.
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

impl SweeperConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self, SweepError> {
        let config: Self =
            toml::from_str(raw).map_err(|e| SweepError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot operate with.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.destination == Address::ZERO {
            return Err(SweepError::InvalidConfig(
                "destination must not be the zero address".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for chain in &self.chains {
            if chain.id.is_empty() {
                return Err(SweepError::InvalidConfig(
                    "chain id must not be empty".to_string(),
                ));
            }
            if !seen.insert(chain.id.as_str()) {
                return Err(SweepError::InvalidConfig(format!(
                    "duplicate chain id `{}`",
                    chain.id
                )));
            }
            chain
                .rpc_url
                .parse::<url::Url>()
                .map_err(|e| {
                    SweepError::InvalidConfig(format!(
                        "chain `{}` has an invalid rpc_url: {}",
                        chain.id, e
                    ))
                })?;
        }

        Ok(())
    }
}
