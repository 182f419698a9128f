// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Sweep-level error taxonomy.
//!
//! Only failures that prevent determining which account or chain to operate
//! on surface as a `SweepError`. Per-asset probe and transfer failures are
//! recovered locally and recorded in the [`SweepReport`](crate::SweepReport)
//! instead.

use alloy::primitives::Address;

/// Hard failures that abort a sweep invocation before any report exists.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The requested chain id is not present in the endpoint registry.
    #[error("unknown chain `{0}`")]
    UnknownChain(String),

    /// The credential could not derive a signing identity.
    #[error("invalid signing credential: {0}")]
    CredentialInvalid(String),

    /// The chain endpoint could not answer the queries a sweep starts from.
    #[error("chain unavailable: {0}")]
    ChainUnavailable(String),

    /// The swept account equals the destination; sweeping would only burn fees.
    #[error("account {0} is the sweep destination; refusing self-sweep")]
    SelfSweep(Address),

    /// Configuration rejected at load time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
