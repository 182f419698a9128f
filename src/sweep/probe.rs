// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Balance probing for one account on one chain.
//!
//! The native balance read is load-bearing: if it fails the whole sweep is
//! off. Token reads are not: a failed read is recorded against that contract
//! and probing moves on, so one broken token never hides another.

use alloy::primitives::{Address, U256};
use tracing::warn;

use crate::chain::{ChainEndpoint, EndpointError};

/// A nonzero token balance captured at probe time.
///
/// May be stale by the time the transfer executes; the engine accepts that
/// race and does not re-check before sending.
#[derive(Debug, Clone)]
pub struct BalanceSnapshot {
    pub contract: Address,
    pub symbol: String,
    pub decimals: u8,
    pub raw_amount: U256,
}

/// One watchlist entry's probe result, in watchlist order.
#[derive(Debug, Clone)]
pub enum TokenProbe {
    /// Nonzero balance with readable metadata.
    Holding(BalanceSnapshot),
    /// The contract could not be read; carried into the report as a failure.
    Unreadable { contract: Address, reason: String },
}

/// Balances discovered for one account.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub native_balance: U256,
    /// Entries for every watchlist token that is nonzero or unreadable.
    /// Zero balances are excluded.
    pub tokens: Vec<TokenProbe>,
}

/// Probe native and watchlisted token balances.
pub async fn probe_balances(
    endpoint: &dyn ChainEndpoint,
    account: Address,
    watchlist: &[Address],
) -> Result<ProbeResult, EndpointError> {
    let native_balance = endpoint.native_balance(account).await?;

    let mut tokens = Vec::new();
    for &contract in watchlist {
        let balance = match endpoint.token_balance(contract, account).await {
            Ok(balance) => balance,
            Err(e) => {
                warn!(%contract, error = %e, "token balance read failed");
                tokens.push(TokenProbe::Unreadable {
                    contract,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if balance.is_zero() {
            continue;
        }

        // Metadata is only fetched for tokens we will actually transfer.
        match endpoint.token_metadata(contract).await {
            Ok(metadata) => tokens.push(TokenProbe::Holding(BalanceSnapshot {
                contract,
                symbol: metadata.symbol,
                decimals: metadata.decimals,
                raw_amount: balance,
            })),
            Err(e) => {
                warn!(%contract, error = %e, "token metadata read failed");
                tokens.push(TokenProbe::Unreadable {
                    contract,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(ProbeResult {
        native_balance,
        tokens,
    })
}
