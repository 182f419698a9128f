// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Chain configuration and amount formatting helpers.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Gas limit for a plain native transfer.
pub const NATIVE_TRANSFER_GAS: u64 = 21_000;

/// Gas limit for an ERC-20 `transfer` call.
pub const TOKEN_TRANSFER_GAS: u64 = 100_000;

/// Default fee reserve withheld from a native sweep: 21k gas at 20 gwei.
pub const DEFAULT_RESERVE_WEI: u128 = 21_000 * 20_000_000_000;

/// Configuration for one EVM chain endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Registry key, e.g. "eth", "bsc", "polygon"
    pub id: String,
    /// Network name for display
    pub name: String,
    /// EIP-155 chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Block explorer URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    /// Native balance withheld per sweep to cover the sweep's own fee, in wei
    #[serde(default = "default_reserve_wei")]
    pub reserve_wei: u128,
    /// Ordered ERC-20 watchlist for this chain
    #[serde(default)]
    pub tokens: Vec<Address>,
}

fn default_reserve_wei() -> u128 {
    DEFAULT_RESERVE_WEI
}

impl ChainConfig {
    /// The configured fee reserve as a `U256`.
    pub fn reserve(&self) -> U256 {
        U256::from(self.reserve_wei)
    }
}

/// Format a raw amount with the specified number of decimals.
///
/// Truncates to 6 fractional digits for display; amounts whose fractional
/// part is below that precision render as the whole part alone.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / divisor;
    let frac = amount % divisor;

    if frac.is_zero() {
        return whole.to_string();
    }

    let mut frac_str = format!("{frac:0>width$}", width = decimals as usize);
    frac_str.truncate(6);
    let trimmed = frac_str.trim_end_matches('0');
    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units() {
        // Whole number of an 8-decimal token
        assert_eq!(format_units(U256::from(300_000_000u64), 8), "3");

        // 0.25 of an 18-decimal asset
        assert_eq!(
            format_units(U256::from(250_000_000_000_000_000u64), 18),
            "0.25"
        );

        // Display precision caps at 6 fractional digits
        assert_eq!(
            format_units(U256::from(2_718_281_828_459_045_235u64), 18),
            "2.718281"
        );

        // 12.5 of a 6-decimal token
        assert_eq!(format_units(U256::from(12_500_000u64), 6), "12.5");

        assert_eq!(format_units(U256::ZERO, 18), "0");
    }

    #[test]
    fn test_format_units_collapses_sub_precision_dust() {
        // 1e11 wei is far below the 6-digit display precision at 18 decimals
        assert_eq!(format_units(U256::from(100_000_000_000u64), 18), "0");
    }

    #[test]
    fn test_default_reserve_covers_one_native_transfer() {
        // 21k gas at 20 gwei
        assert_eq!(DEFAULT_RESERVE_WEI, 420_000_000_000_000);
    }

    #[test]
    fn test_chain_config_toml_defaults() {
        let config: ChainConfig = toml::from_str(
            r#"
            id = "eth"
            name = "Ethereum Mainnet"
            chain_id = 1
            rpc_url = "https://eth.example.org/rpc"
            "#,
        )
        .unwrap();

        assert_eq!(config.reserve_wei, DEFAULT_RESERVE_WEI);
        assert!(config.tokens.is_empty());
        assert!(config.explorer_url.is_none());
    }
}
