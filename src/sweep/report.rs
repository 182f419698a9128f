// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Sweep report types.
//!
//! A report is assembled once per sweep invocation and returned to the
//! caller; the engine retains nothing. Native and token outcomes are
//! independent, so a report can mix successes and failures.

use alloy::primitives::{Address, TxHash, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The asset a transfer outcome refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetDescriptor {
    /// The chain's base currency.
    Native,
    /// An ERC-20 token. Symbol and decimals are absent when the contract
    /// could not be read.
    Token {
        contract: Address,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        decimals: Option<u8>,
    },
}

impl AssetDescriptor {
    /// Descriptor for a token whose contract could not be probed.
    pub fn unknown_token(contract: Address) -> Self {
        Self::Token {
            contract,
            symbol: None,
            decimals: None,
        }
    }
}

/// Terminal state of one attempted transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransferStatus {
    Success { amount_sent: U256, tx_hash: TxHash },
    Failed { reason: String },
}

/// One per attempted transfer (or per unreadable watchlist entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub asset: AssetDescriptor,
    #[serde(flatten)]
    pub status: TransferStatus,
}

impl TransferOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, TransferStatus::Success { .. })
    }
}

/// Combined result of one sweep invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Account that was swept
    pub account: Address,
    /// Chain id the sweep ran on
    pub chain: String,
    /// When the report was assembled
    pub swept_at: DateTime<Utc>,
    /// Native transfer outcome; `None` when nothing was planned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<TransferOutcome>,
    /// Token outcomes in watchlist discovery order
    pub tokens: Vec<TransferOutcome>,
}

impl SweepReport {
    /// Assemble the report from independently collected outcomes.
    pub fn assemble(
        chain: &str,
        account: Address,
        native: Option<TransferOutcome>,
        tokens: Vec<TransferOutcome>,
    ) -> Self {
        Self {
            account,
            chain: chain.to_string(),
            swept_at: Utc::now(),
            native,
            tokens,
        }
    }

    /// Number of transfers attempted (successful or not).
    pub fn attempted(&self) -> usize {
        usize::from(self.native.is_some()) + self.tokens.len()
    }

    /// True when every attempted transfer succeeded.
    pub fn fully_succeeded(&self) -> bool {
        self.native.iter().all(TransferOutcome::succeeded)
            && self.tokens.iter().all(TransferOutcome::succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_a_successful_noop() {
        let report = SweepReport::assemble("eth", Address::repeat_byte(1), None, Vec::new());
        assert_eq!(report.attempted(), 0);
        assert!(report.fully_succeeded());
    }

    #[test]
    fn mixed_outcomes_are_counted_but_not_fully_successful() {
        let report = SweepReport::assemble(
            "eth",
            Address::repeat_byte(1),
            Some(TransferOutcome {
                asset: AssetDescriptor::Native,
                status: TransferStatus::Success {
                    amount_sent: U256::from(5u64),
                    tx_hash: TxHash::repeat_byte(9),
                },
            }),
            vec![TransferOutcome {
                asset: AssetDescriptor::unknown_token(Address::repeat_byte(2)),
                status: TransferStatus::Failed {
                    reason: "balanceOf reverted".to_string(),
                },
            }],
        );

        assert_eq!(report.attempted(), 2);
        assert!(!report.fully_succeeded());
    }

    #[test]
    fn report_serializes_without_leaking_empty_fields() {
        let report = SweepReport::assemble("eth", Address::repeat_byte(1), None, Vec::new());
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("native"));
        assert!(json.contains("\"tokens\":[]"));
    }

    #[test]
    fn outcome_round_trips_through_json() {
        let outcome = TransferOutcome {
            asset: AssetDescriptor::Token {
                contract: Address::repeat_byte(2),
                symbol: Some("USDT".to_string()),
                decimals: Some(6),
            },
            status: TransferStatus::Success {
                amount_sent: U256::from(500u64),
                tx_hash: TxHash::repeat_byte(9),
            },
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let decoded: TransferOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, outcome);
    }
}
