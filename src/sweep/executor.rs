// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Sweep orchestration.
//!
//! One sweep = probe, plan, native transfer, then token transfers in
//! discovery order. Each transfer is confirmed before the next is sent so a
//! single signing identity never races its own nonce. Transfer failures are
//! recorded per asset and never abort the rest of the sweep; a single attempt
//! is made per transfer, with no retries.
//!
//! Concurrent sweeps for different accounts or chains are safe. Two
//! concurrent sweeps for the same account on the same chain are not; the
//! caller must serialize those.

use std::sync::Arc;

use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
};
use tracing::{info, warn};

use crate::chain::{format_units, ChainEndpoint, EndpointRegistry};
use crate::credentials::SigningCredential;
use crate::error::SweepError;
use crate::watchlist::WatchlistProvider;

use super::plan::{plan_native_amount, ReservePolicy};
use super::probe::{probe_balances, BalanceSnapshot, TokenProbe};
use super::report::{AssetDescriptor, SweepReport, TransferOutcome, TransferStatus};

/// Drains managed accounts into the configured destination.
pub struct Sweeper {
    registry: EndpointRegistry,
    watchlists: Arc<dyn WatchlistProvider>,
    destination: Address,
    reserve_policy: ReservePolicy,
}

impl Sweeper {
    pub fn new(
        registry: EndpointRegistry,
        watchlists: Arc<dyn WatchlistProvider>,
        destination: Address,
    ) -> Self {
        Self {
            registry,
            watchlists,
            destination,
            reserve_policy: ReservePolicy::default(),
        }
    }

    /// Swap in a non-default reserve policy.
    pub fn with_reserve_policy(mut self, policy: ReservePolicy) -> Self {
        self.reserve_policy = policy;
        self
    }

    pub fn destination(&self) -> Address {
        self.destination
    }

    /// Sweep one account on one chain.
    ///
    /// The account is derived from the credential unless `explicit_address`
    /// is given (for watch-only sweeps of an address the credential also
    /// controls). Returns a report describing every attempted transfer, or a
    /// hard error when the chain or credential cannot be resolved.
    pub async fn sweep(
        &self,
        chain_id: &str,
        credential: &SigningCredential,
        explicit_address: Option<Address>,
    ) -> Result<SweepReport, SweepError> {
        let endpoint = self.registry.resolve(chain_id)?;

        let signer = credential
            .signer()
            .map_err(|e| SweepError::CredentialInvalid(e.to_string()))?;
        let account = explicit_address.unwrap_or_else(|| signer.address());

        if account == self.destination {
            return Err(SweepError::SelfSweep(account));
        }

        let watchlist = self.watchlists.watchlist(chain_id);
        info!(chain = chain_id, %account, watchlist = watchlist.len(), "sweeping account");

        let probe = probe_balances(endpoint.as_ref(), account, &watchlist)
            .await
            .map_err(|e| SweepError::ChainUnavailable(e.to_string()))?;

        let reserve = self.reserve_policy.resolve(endpoint.as_ref()).await;
        let amount = plan_native_amount(probe.native_balance, reserve);

        let native = if amount.is_zero() {
            info!(
                chain = chain_id,
                balance = %probe.native_balance,
                %reserve,
                "native balance at or below reserve; skipping native transfer"
            );
            None
        } else {
            Some(self.transfer_native(endpoint.as_ref(), &signer, amount).await)
        };

        let mut tokens = Vec::with_capacity(probe.tokens.len());
        for entry in probe.tokens {
            match entry {
                TokenProbe::Unreadable { contract, reason } => {
                    tokens.push(TransferOutcome {
                        asset: AssetDescriptor::unknown_token(contract),
                        status: TransferStatus::Failed { reason },
                    });
                }
                TokenProbe::Holding(snapshot) => {
                    tokens.push(
                        self.transfer_token(endpoint.as_ref(), &signer, snapshot)
                            .await,
                    );
                }
            }
        }

        Ok(SweepReport::assemble(chain_id, account, native, tokens))
    }

    async fn transfer_native(
        &self,
        endpoint: &dyn ChainEndpoint,
        signer: &PrivateKeySigner,
        amount: U256,
    ) -> TransferOutcome {
        let status = match endpoint.send_native(signer, self.destination, amount).await {
            Err(e) => {
                warn!(chain = %endpoint.chain().id, error = %e, "native transfer broadcast failed");
                TransferStatus::Failed {
                    reason: e.to_string(),
                }
            }
            Ok(tx_hash) => match endpoint.wait_for_inclusion(tx_hash).await {
                Err(e) => TransferStatus::Failed {
                    reason: format!("broadcast {tx_hash} but confirmation failed: {e}"),
                },
                Ok(inclusion) if !inclusion.success => TransferStatus::Failed {
                    reason: format!(
                        "transaction {tx_hash} reverted in block {}",
                        inclusion.block_number
                    ),
                },
                Ok(_) => {
                    info!(
                        chain = %endpoint.chain().id,
                        amount = %format_units(amount, 18),
                        %tx_hash,
                        "native transfer confirmed"
                    );
                    TransferStatus::Success {
                        amount_sent: amount,
                        tx_hash,
                    }
                }
            },
        };

        TransferOutcome {
            asset: AssetDescriptor::Native,
            status,
        }
    }

    async fn transfer_token(
        &self,
        endpoint: &dyn ChainEndpoint,
        signer: &PrivateKeySigner,
        snapshot: BalanceSnapshot,
    ) -> TransferOutcome {
        // Tokens sweep the full probed balance; fees are paid in native.
        let amount = snapshot.raw_amount;

        let status = match endpoint
            .send_token(signer, snapshot.contract, self.destination, amount)
            .await
        {
            Err(e) => {
                warn!(
                    chain = %endpoint.chain().id,
                    token = %snapshot.symbol,
                    error = %e,
                    "token transfer broadcast failed"
                );
                TransferStatus::Failed {
                    reason: e.to_string(),
                }
            }
            Ok(tx_hash) => match endpoint.wait_for_inclusion(tx_hash).await {
                Err(e) => TransferStatus::Failed {
                    reason: format!("broadcast {tx_hash} but confirmation failed: {e}"),
                },
                Ok(inclusion) if !inclusion.success => TransferStatus::Failed {
                    reason: format!(
                        "transaction {tx_hash} reverted in block {}",
                        inclusion.block_number
                    ),
                },
                Ok(_) => {
                    info!(
                        chain = %endpoint.chain().id,
                        token = %snapshot.symbol,
                        amount = %format_units(amount, snapshot.decimals),
                        %tx_hash,
                        "token transfer confirmed"
                    );
                    TransferStatus::Success {
                        amount_sent: amount,
                        tx_hash,
                    }
                }
            },
        };

        TransferOutcome {
            asset: AssetDescriptor::Token {
                contract: snapshot.contract,
                symbol: Some(snapshot.symbol),
                decimals: Some(snapshot.decimals),
            },
            status,
        }
    }
}
