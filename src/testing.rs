// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Scripted chain endpoint for engine tests.
//!
//! Balances are debited on successful sends so repeated sweeps against the
//! same fake observe converging balances, like a real chain would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use alloy::{
    primitives::{Address, TxHash, U256},
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;

use crate::chain::{ChainConfig, ChainEndpoint, EndpointError, Inclusion, TokenMetadata};

/// A transfer the fake accepted, in broadcast order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SentTransfer {
    Native {
        to: Address,
        amount: U256,
    },
    Token {
        contract: Address,
        to: Address,
        amount: U256,
    },
}

struct TokenAccount {
    balance: Result<U256, String>,
    metadata: Option<TokenMetadata>,
}

pub(crate) struct FakeEndpoint {
    config: ChainConfig,
    native_balance: Mutex<U256>,
    fail_native_read: bool,
    gas_price: u128,
    fail_gas_price: bool,
    tokens: Mutex<HashMap<Address, TokenAccount>>,
    fail_native_send: Option<String>,
    fail_token_send: HashMap<Address, String>,
    revert_sends: bool,
    sent: Mutex<Vec<SentTransfer>>,
    next_nonce: AtomicU8,
}

impl FakeEndpoint {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            config: ChainConfig {
                id: id.to_string(),
                name: format!("{id} (fake)"),
                chain_id: 1337,
                rpc_url: "http://127.0.0.1:0".to_string(),
                explorer_url: None,
                reserve_wei: 0,
                tokens: Vec::new(),
            },
            native_balance: Mutex::new(U256::ZERO),
            fail_native_read: false,
            gas_price: 1,
            fail_gas_price: false,
            tokens: Mutex::new(HashMap::new()),
            fail_native_send: None,
            fail_token_send: HashMap::new(),
            revert_sends: false,
            sent: Mutex::new(Vec::new()),
            next_nonce: AtomicU8::new(1),
        }
    }

    pub(crate) fn with_reserve(mut self, reserve_wei: u128) -> Self {
        self.config.reserve_wei = reserve_wei;
        self
    }

    pub(crate) fn with_native_balance(self, balance: u64) -> Self {
        *self.native_balance.lock().unwrap() = U256::from(balance);
        self
    }

    pub(crate) fn with_native_read_failure(mut self) -> Self {
        self.fail_native_read = true;
        self
    }

    pub(crate) fn with_gas_price(mut self, price: u128) -> Self {
        self.gas_price = price;
        self
    }

    pub(crate) fn with_gas_price_failure(mut self) -> Self {
        self.fail_gas_price = true;
        self
    }

    pub(crate) fn with_token(
        self,
        contract: Address,
        balance: u64,
        symbol: &str,
        decimals: u8,
    ) -> Self {
        self.tokens.lock().unwrap().insert(
            contract,
            TokenAccount {
                balance: Ok(U256::from(balance)),
                metadata: Some(TokenMetadata {
                    symbol: symbol.to_string(),
                    decimals,
                }),
            },
        );
        self
    }

    pub(crate) fn with_unreadable_token(self, contract: Address, reason: &str) -> Self {
        self.tokens.lock().unwrap().insert(
            contract,
            TokenAccount {
                balance: Err(reason.to_string()),
                metadata: None,
            },
        );
        self
    }

    pub(crate) fn with_token_without_metadata(self, contract: Address, balance: u64) -> Self {
        self.tokens.lock().unwrap().insert(
            contract,
            TokenAccount {
                balance: Ok(U256::from(balance)),
                metadata: None,
            },
        );
        self
    }

    pub(crate) fn with_failing_native_send(mut self, reason: &str) -> Self {
        self.fail_native_send = Some(reason.to_string());
        self
    }

    pub(crate) fn with_failing_token_send(mut self, contract: Address, reason: &str) -> Self {
        self.fail_token_send.insert(contract, reason.to_string());
        self
    }

    pub(crate) fn with_reverting_sends(mut self) -> Self {
        self.revert_sends = true;
        self
    }

    /// Transfers accepted so far, in broadcast order.
    pub(crate) fn sent(&self) -> Vec<SentTransfer> {
        self.sent.lock().unwrap().clone()
    }

    fn next_hash(&self) -> TxHash {
        TxHash::with_last_byte(self.next_nonce.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl ChainEndpoint for FakeEndpoint {
    fn chain(&self) -> &ChainConfig {
        &self.config
    }

    async fn native_balance(&self, _account: Address) -> Result<U256, EndpointError> {
        if self.fail_native_read {
            return Err(EndpointError::Rpc("connection refused".to_string()));
        }
        Ok(*self.native_balance.lock().unwrap())
    }

    async fn token_balance(
        &self,
        token: Address,
        _account: Address,
    ) -> Result<U256, EndpointError> {
        match self.tokens.lock().unwrap().get(&token) {
            None => Ok(U256::ZERO),
            Some(account) => account
                .balance
                .clone()
                .map_err(EndpointError::Contract),
        }
    }

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, EndpointError> {
        self.tokens
            .lock()
            .unwrap()
            .get(&token)
            .and_then(|account| account.metadata.clone())
            .ok_or_else(|| EndpointError::Contract("metadata unavailable".to_string()))
    }

    async fn gas_price(&self) -> Result<u128, EndpointError> {
        if self.fail_gas_price {
            return Err(EndpointError::Rpc("gas price query failed".to_string()));
        }
        Ok(self.gas_price)
    }

    async fn send_native(
        &self,
        _signer: &PrivateKeySigner,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, EndpointError> {
        if let Some(reason) = &self.fail_native_send {
            return Err(EndpointError::TransactionFailed(reason.clone()));
        }

        let mut balance = self.native_balance.lock().unwrap();
        *balance = balance.saturating_sub(amount);

        self.sent
            .lock()
            .unwrap()
            .push(SentTransfer::Native { to, amount });
        Ok(self.next_hash())
    }

    async fn send_token(
        &self,
        _signer: &PrivateKeySigner,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, EndpointError> {
        if let Some(reason) = self.fail_token_send.get(&token) {
            return Err(EndpointError::TransactionFailed(reason.clone()));
        }

        if let Some(account) = self.tokens.lock().unwrap().get_mut(&token) {
            if let Ok(balance) = &mut account.balance {
                *balance = balance.saturating_sub(amount);
            }
        }

        self.sent.lock().unwrap().push(SentTransfer::Token {
            contract: token,
            to,
            amount,
        });
        Ok(self.next_hash())
    }

    async fn wait_for_inclusion(&self, _tx_hash: TxHash) -> Result<Inclusion, EndpointError> {
        Ok(Inclusion {
            block_number: 1,
            gas_used: 21_000,
            success: !self.revert_sends,
        })
    }
}
