// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! The sweep engine.
//!
//! This module provides functionality for:
//! - Probing native and watchlisted token balances
//! - Planning fee-adjusted native transfer amounts
//! - Executing ordered transfers with per-asset failure isolation
//! - Assembling the per-invocation sweep report

pub mod executor;
pub mod plan;
pub mod probe;
pub mod report;

pub use executor::Sweeper;
pub use plan::{plan_native_amount, ReservePolicy};
pub use probe::{probe_balances, BalanceSnapshot, ProbeResult, TokenProbe};
pub use report::{AssetDescriptor, SweepReport, TransferOutcome, TransferStatus};
