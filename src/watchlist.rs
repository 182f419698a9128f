// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Asset watchlist provider.
//!
//! The engine only probes token contracts it is explicitly told about; it
//! never scans a chain for arbitrary tokens. Watchlists are ordered per chain
//! and read-only after construction.

use std::collections::HashMap;

use alloy::primitives::Address;

use crate::chain::ChainConfig;

/// Supplies, per chain, the ordered list of token contracts to probe.
pub trait WatchlistProvider: Send + Sync {
    /// Token contracts for the given chain, in probe order.
    ///
    /// An unknown chain yields an empty watchlist, not an error: a sweep on
    /// a chain with no configured tokens is a native-only sweep.
    fn watchlist(&self, chain_id: &str) -> Vec<Address>;
}

/// Watchlist backed by static per-chain configuration.
pub struct StaticWatchlist {
    per_chain: HashMap<String, Vec<Address>>,
}

impl StaticWatchlist {
    pub fn new(per_chain: HashMap<String, Vec<Address>>) -> Self {
        Self { per_chain }
    }

    /// Collect the watchlists embedded in chain configurations.
    pub fn from_chains(chains: &[ChainConfig]) -> Self {
        Self {
            per_chain: chains
                .iter()
                .map(|c| (c.id.clone(), c.tokens.clone()))
                .collect(),
        }
    }
}

impl WatchlistProvider for StaticWatchlist {
    fn watchlist(&self, chain_id: &str) -> Vec<Address> {
        self.per_chain.get(chain_id).cloned().unwrap_or_default()
    }
}
