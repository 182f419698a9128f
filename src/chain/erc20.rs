// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! ERC-20 token contract interactions.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::endpoint::{EndpointError, TokenMetadata};

// Define the ERC-20 interface using alloy's sol! macro
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// ERC-20 contract wrapper.
pub struct Erc20Contract<P> {
    contract: IERC20::IERC20Instance<P>,
}

impl<P: Provider + Clone> Erc20Contract<P> {
    /// Create a new ERC-20 contract instance.
    pub fn new(provider: &P, contract_address: Address) -> Self {
        Self {
            contract: IERC20::new(contract_address, provider.clone()),
        }
    }

    /// Get the balance of an address, in the token's smallest unit.
    pub async fn balance_of(&self, account: Address) -> Result<U256, EndpointError> {
        self.contract
            .balanceOf(account)
            .call()
            .await
            .map_err(|e| EndpointError::Contract(e.to_string()))
    }

    /// Read symbol and decimals.
    ///
    /// Both calls must succeed; partially-known metadata is a probe failure,
    /// not a guess.
    pub async fn metadata(&self) -> Result<TokenMetadata, EndpointError> {
        let symbol = self
            .contract
            .symbol()
            .call()
            .await
            .map_err(|e| EndpointError::Contract(e.to_string()))?;

        let decimals = self
            .contract
            .decimals()
            .call()
            .await
            .map_err(|e| EndpointError::Contract(e.to_string()))?;

        Ok(TokenMetadata {
            symbol: symbol.to_string(),
            decimals,
        })
    }
}
