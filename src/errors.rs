//! centralizes all error messages and the error taxonomy

use crate::guard::DenyReason;
use thiserror::Error;

pub mod amounts {
    pub const NEGATIVE_AMOUNT: &str = "amount must not be negative";

    pub const NON_FINITE_AMOUNT: &str = "amount must be a finite number";

    pub const MALFORMED_AMOUNT: &str = "amount is not a valid decimal number";

    pub const AMOUNT_OUT_OF_RANGE: &str = "amount is too large to be represented in base units";

    pub const DECIMALS_OUT_OF_RANGE: &str = "token decimals are too large";
}

pub mod guards {
    pub const AMOUNT_NOT_SET: &str = "amount is required";

    pub const AMOUNT_NOT_POSITIVE: &str = "amount must be greater than zero";

    pub const INSUFFICIENT_WALLET_BALANCE: &str = "amount exceeds the wallet token balance";

    pub const INSUFFICIENT_STAKE_BALANCE: &str = "amount exceeds the staked balance";

    pub const REWARD_BELOW_CLAIM_THRESHOLD: &str =
        "pending reward is below the minimum claim amount";

    pub const NOTHING_TO_WITHDRAW: &str = "there is no unstaked balance to withdraw";

    pub const UNSTAKED_FUNDS_NOT_RELEASED: &str =
        "unstaked funds are not yet available for withdrawal";

    pub const POOL_PAUSED: &str = "staking pool is paused";

    pub const INVALID_AMOUNT: &str = "amount is invalid";
}

pub mod session {
    pub const LOGIN_DID_NOT_SIGN_IN: &str = "login completed but the wallet is not signed in";
}

/// Every failure the staking client reports.
///
/// [StakingError::InvalidAmount] and [StakingError::GuardDenied] are detected locally and never
/// reach the contract. [StakingError::RemoteFailure] is recorded on the action that failed.
/// [StakingError::StaleRefresh] is only logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StakingError {
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),
    #[error("action denied: {0}")]
    GuardDenied(DenyReason),
    #[error("remote call failed: {0}")]
    RemoteFailure(String),
    #[error("refresh result was superseded by a newer refresh")]
    StaleRefresh,
    #[error("token metadata is not available for: {0}")]
    UnknownToken(String),
}

impl From<DenyReason> for StakingError {
    fn from(reason: DenyReason) -> Self {
        StakingError::GuardDenied(reason)
    }
}
