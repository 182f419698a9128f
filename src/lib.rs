// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Coinsweep - Multi-Chain EVM Balance Sweep Engine
//!
//! This crate consolidates native and ERC-20 balances from managed accounts
//! across configured EVM chains into one destination account. The embedding
//! process supplies the configuration, the sealed credentials, and whatever
//! command surface triggers sweeps; this crate owns the sweep itself.
//!
//! ## Modules
//!
//! - `chain` - Endpoint registry, alloy HTTP client, ERC-20 bindings
//! - `config` - Deployment configuration (TOML)
//! - `credentials` - Signing credentials and sealed-credential handling
//! - `sweep` - Probe, plan, execute, report
//! - `watchlist` - Per-chain token watchlists
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use coinsweep::{
//!     EndpointRegistry, SigningCredential, StaticWatchlist, Sweeper, SweeperConfig,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SweeperConfig::from_toml_str(std::fs::read_to_string("sweeper.toml")?.as_str())?;
//! let registry = EndpointRegistry::connect(&config.chains)?;
//! let watchlists = Arc::new(StaticWatchlist::from_chains(&config.chains));
//!
//! let sweeper = Sweeper::new(registry, watchlists, config.destination);
//! let credential = SigningCredential::new(std::env::var("SWEEP_KEY")?);
//!
//! let report = sweeper.sweep("eth", &credential, None).await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod config;
pub mod credentials;
pub mod error;
pub mod sweep;
pub mod watchlist;

#[cfg(test)]
pub(crate) mod testing;

pub use chain::{ChainConfig, ChainEndpoint, EndpointError, EndpointRegistry, HttpEndpoint};
pub use config::SweeperConfig;
pub use credentials::{CredentialError, SealedCredential, SealingKey, SigningCredential};
pub use error::SweepError;
pub use sweep::{
    AssetDescriptor, ReservePolicy, SweepReport, Sweeper, TransferOutcome, TransferStatus,
};
pub use watchlist::{StaticWatchlist, WatchlistProvider};
