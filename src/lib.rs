//! Client side view over a NEAR token staking contract.
//!
//! The [controller::LifecycleController] mirrors the account and pool state reported by the
//! contract into snapshots, gates user actions through the pure functions in [guard], and submits
//! stake / unstake / claim / withdraw requests on behalf of the signed in wallet account.
//!
//! Wallet sessions, contract RPC and token metadata are external collaborators, see [interface].

pub mod config;
pub mod controller;
pub mod core;
pub mod domain;
pub mod errors;
pub mod guard;
pub mod interface;
pub mod near;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use controller::{ActionOutcome, LifecycleController, RefreshOutcome, RefreshReport};
pub use errors::StakingError;
pub use guard::{DenyReason, GuardDecision};
