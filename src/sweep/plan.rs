// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Fee-adjusted transfer planning.
//!
//! Native sweeps withhold a reserve to pay for the sweep transaction itself.
//! Token transfers are never fee-adjusted: the fee is paid in the native
//! asset, so the full token balance is planned.

use alloy::primitives::U256;
use tracing::warn;

use crate::chain::ChainEndpoint;

/// Maximum safely transferable native amount given the fee reserve.
///
/// A balance at or below the reserve plans a zero amount; that is a no-op,
/// not an error.
pub fn plan_native_amount(balance: U256, reserve: U256) -> U256 {
    balance.saturating_sub(reserve)
}

/// Strategy for choosing the native fee reserve.
///
/// `Fixed` is the baseline: a conservative per-chain constant, immune to RPC
/// hiccups but stale when fees spike. `DynamicGas` prices the reserve from
/// the endpoint's current gas price; it falls back to the fixed reserve when
/// the query fails rather than aborting the sweep.
#[derive(Debug, Clone, Default)]
pub enum ReservePolicy {
    #[default]
    Fixed,
    DynamicGas {
        gas_limit: u64,
    },
}

impl ReservePolicy {
    /// Resolve the reserve to apply for a sweep on the given endpoint.
    pub async fn resolve(&self, endpoint: &dyn ChainEndpoint) -> U256 {
        match self {
            Self::Fixed => endpoint.chain().reserve(),
            Self::DynamicGas { gas_limit } => match endpoint.gas_price().await {
                Ok(price) => U256::from(price).saturating_mul(U256::from(*gas_limit)),
                Err(e) => {
                    warn!(
                        chain = %endpoint.chain().id,
                        error = %e,
                        "gas price query failed; using fixed reserve"
                    );
                    endpoint.chain().reserve()
                }
            },
        }
    }
}
