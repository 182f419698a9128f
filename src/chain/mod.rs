// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Chain integration module.
//!
//! This module provides functionality for:
//! - Querying native and ERC-20 balances
//! - Signing and broadcasting native and token transfers
//! - Resolving configured chains to endpoint handles

pub mod client;
pub mod endpoint;
pub mod erc20;
pub mod registry;
pub mod types;

pub use client::HttpEndpoint;
pub use endpoint::{ChainEndpoint, EndpointError, Inclusion, TokenMetadata};
pub use registry::EndpointRegistry;
pub use types::*;
