// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Chain endpoint registry.
//!
//! A frozen mapping from chain identifier to endpoint handle. Built once at
//! startup; never mutated afterwards, so sweeps on different chains can share
//! it without locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SweepError;

use super::client::HttpEndpoint;
use super::endpoint::{ChainEndpoint, EndpointError};
use super::types::ChainConfig;

/// Frozen mapping from chain id to endpoint.
pub struct EndpointRegistry {
    endpoints: HashMap<String, Arc<dyn ChainEndpoint>>,
}

impl EndpointRegistry {
    /// Build a registry from pre-constructed endpoints, keyed by chain id.
    pub fn new(endpoints: impl IntoIterator<Item = Arc<dyn ChainEndpoint>>) -> Self {
        Self {
            endpoints: endpoints
                .into_iter()
                .map(|e| (e.chain().id.clone(), e))
                .collect(),
        }
    }

    /// Connect an HTTP endpoint for every configured chain.
    pub fn connect(chains: &[ChainConfig]) -> Result<Self, EndpointError> {
        let mut endpoints: HashMap<String, Arc<dyn ChainEndpoint>> = HashMap::new();
        for chain in chains {
            let endpoint = HttpEndpoint::connect(chain.clone())?;
            endpoints.insert(chain.id.clone(), Arc::new(endpoint));
        }
        Ok(Self { endpoints })
    }

    /// Resolve a chain id to its endpoint handle.
    pub fn resolve(&self, chain_id: &str) -> Result<Arc<dyn ChainEndpoint>, SweepError> {
        self.endpoints
            .get(chain_id)
            .cloned()
            .ok_or_else(|| SweepError::UnknownChain(chain_id.to_string()))
    }

    /// Chain ids known to this registry.
    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeEndpoint;

    #[test]
    fn resolve_unknown_chain_fails() {
        let registry = EndpointRegistry::new([]);
        let Err(err) = registry.resolve("base") else {
            panic!("resolving an unconfigured chain must fail");
        };
        assert!(matches!(err, SweepError::UnknownChain(id) if id == "base"));
    }

    #[test]
    fn resolve_returns_registered_endpoint() {
        let endpoint = Arc::new(FakeEndpoint::new("eth"));
        let registry = EndpointRegistry::new([endpoint as Arc<dyn ChainEndpoint>]);

        let handle = registry.resolve("eth").unwrap();
        assert_eq!(handle.chain().id, "eth");
        assert_eq!(registry.chain_ids().count(), 1);
    }
}
