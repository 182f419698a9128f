// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! HTTP-backed chain endpoint using alloy.
//!
//! One `HttpEndpoint` is constructed per configured chain at startup and
//! shared read-only by all sweeps on that chain. Sends build a short-lived
//! wallet-filled provider around the sweep's signer; the read provider never
//! holds key material.

use std::time::Duration;

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{Address, TxHash, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol_types::SolCall,
};
use async_trait::async_trait;

use super::endpoint::{ChainEndpoint, EndpointError, Inclusion, TokenMetadata};
use super::erc20::{Erc20Contract, IERC20};
use super::types::{ChainConfig, NATIVE_TRANSFER_GAS, TOKEN_TRANSFER_GAS};

/// HTTP provider type (with all fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// How often to poll for a transaction receipt.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How many polls before giving up on inclusion.
const RECEIPT_POLL_ATTEMPTS: u32 = 90;

/// Chain endpoint over an HTTP JSON-RPC connection.
pub struct HttpEndpoint {
    /// Chain configuration
    config: ChainConfig,
    /// Parsed RPC URL, reused for per-send wallet providers
    url: url::Url,
    /// Alloy HTTP provider for reads and receipt polling
    provider: HttpProvider,
}

impl HttpEndpoint {
    /// Create a new endpoint for the specified chain.
    pub fn connect(config: ChainConfig) -> Result<Self, EndpointError> {
        let url: url::Url = config
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| EndpointError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url.clone());

        Ok(Self {
            config,
            url,
            provider,
        })
    }

    /// Get current fee caps from the network.
    async fn fee_caps(&self) -> Result<(u128, u128), EndpointError> {
        // Get base fee from latest block
        let block = self
            .provider
            .get_block_by_number(alloy::eips::BlockNumberOrTag::Latest)
            .await
            .map_err(|e| EndpointError::Rpc(format!("Failed to get block: {}", e)))?
            .ok_or_else(|| EndpointError::Rpc("No latest block".to_string()))?;

        let base_fee: u128 = block
            .header
            .base_fee_per_gas
            .map(|f| f as u128)
            .unwrap_or(20_000_000_000u128); // 20 gwei default

        let priority_fee: u128 = 1_500_000_000; // 1.5 gwei

        // Max fee = 2 * base_fee + priority_fee (allows for base fee increase)
        let max_fee = base_fee.saturating_mul(2).saturating_add(priority_fee);

        Ok((max_fee, priority_fee))
    }

    /// Broadcast a prepared request through a wallet-filled provider.
    async fn broadcast(
        &self,
        signer: &PrivateKeySigner,
        tx: TransactionRequest,
    ) -> Result<TxHash, EndpointError> {
        let wallet = EthereumWallet::from(signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.url.clone());

        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| EndpointError::TransactionFailed(format!("Failed to send: {}", e)))?;

        Ok(*pending.tx_hash())
    }
}

#[async_trait]
impl ChainEndpoint for HttpEndpoint {
    fn chain(&self) -> &ChainConfig {
        &self.config
    }

    async fn native_balance(&self, account: Address) -> Result<U256, EndpointError> {
        self.provider
            .get_balance(account)
            .await
            .map_err(|e| EndpointError::Rpc(e.to_string()))
    }

    async fn token_balance(
        &self,
        token: Address,
        account: Address,
    ) -> Result<U256, EndpointError> {
        Erc20Contract::new(&self.provider, token)
            .balance_of(account)
            .await
    }

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, EndpointError> {
        Erc20Contract::new(&self.provider, token).metadata().await
    }

    async fn gas_price(&self) -> Result<u128, EndpointError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| EndpointError::Rpc(e.to_string()))
    }

    async fn send_native(
        &self,
        signer: &PrivateKeySigner,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, EndpointError> {
        let (max_fee_per_gas, priority_fee) = self.fee_caps().await?;

        let tx = TransactionRequest::default()
            .to(to)
            .value(amount)
            .max_fee_per_gas(max_fee_per_gas)
            .max_priority_fee_per_gas(priority_fee)
            .gas_limit(NATIVE_TRANSFER_GAS);

        self.broadcast(signer, tx).await
    }

    async fn send_token(
        &self,
        signer: &PrivateKeySigner,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, EndpointError> {
        // Encode the transfer(to, amount) call
        let call = IERC20::transferCall { to, amount };
        let data = call.abi_encode();

        let (max_fee_per_gas, priority_fee) = self.fee_caps().await?;

        let tx = TransactionRequest::default()
            .to(token)
            .input(data.into())
            .max_fee_per_gas(max_fee_per_gas)
            .max_priority_fee_per_gas(priority_fee)
            .gas_limit(TOKEN_TRANSFER_GAS);

        self.broadcast(signer, tx).await
    }

    async fn wait_for_inclusion(&self, tx_hash: TxHash) -> Result<Inclusion, EndpointError> {
        for _ in 0..RECEIPT_POLL_ATTEMPTS {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| EndpointError::Rpc(format!("Failed to get receipt: {}", e)))?;

            if let Some(receipt) = receipt {
                return Ok(Inclusion {
                    block_number: receipt.block_number.unwrap_or(0),
                    gas_used: receipt.gas_used as u64,
                    success: receipt.status(),
                });
            }

            tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
        }

        Err(EndpointError::ConfirmationTimeout(format!("{tx_hash:?}")))
    }
}
