// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Chain endpoint abstraction.
//!
//! The sweep engine talks to chains through this trait so that tests can
//! substitute scripted endpoints for live RPC connections.

use alloy::{
    primitives::{Address, TxHash, U256},
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;

use super::types::ChainConfig;

/// Symbol and precision read from an ERC-20 contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub symbol: String,
    pub decimals: u8,
}

/// Result of a transaction landing in the canonical chain.
#[derive(Debug, Clone)]
pub struct Inclusion {
    /// Block number where the transaction was included
    pub block_number: u64,
    /// Gas actually used
    pub gas_used: u64,
    /// Whether the transaction succeeded (false = reverted)
    pub success: bool,
}

/// Connection to one chain's RPC endpoint.
///
/// Read methods are independent and may be issued concurrently; sends for the
/// same signing identity must be confirmed before the next send to avoid
/// nonce collisions. The engine enforces that ordering within one sweep.
#[async_trait]
pub trait ChainEndpoint: Send + Sync {
    /// The chain this endpoint is connected to.
    fn chain(&self) -> &ChainConfig;

    /// Native balance of an account, in wei.
    async fn native_balance(&self, account: Address) -> Result<U256, EndpointError>;

    /// ERC-20 balance of an account, in the token's smallest unit.
    async fn token_balance(&self, token: Address, account: Address)
        -> Result<U256, EndpointError>;

    /// Symbol and decimals of an ERC-20 contract.
    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, EndpointError>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<u128, EndpointError>;

    /// Sign and broadcast a native transfer. Returns the transaction hash.
    async fn send_native(
        &self,
        signer: &PrivateKeySigner,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, EndpointError>;

    /// Sign and broadcast an ERC-20 `transfer`. Returns the transaction hash.
    async fn send_token(
        &self,
        signer: &PrivateKeySigner,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, EndpointError>;

    /// Block until the transaction is included and return its receipt summary.
    async fn wait_for_inclusion(&self, tx_hash: TxHash) -> Result<Inclusion, EndpointError>;
}

/// Errors that can occur while talking to a chain endpoint.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Transaction {0} not confirmed within the polling window")]
    ConfirmationTimeout(String),
}
