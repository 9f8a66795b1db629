//! Pure functions that decide whether a user action is currently permitted.
//!
//! All amounts are compared in base units. Negative and malformed user input never reaches the
//! guards - it is rejected when converted into base units, see [crate::core::amount].

use crate::{
    core::{amount::one_token, U256},
    domain::{AccountSnapshot, PoolSnapshot, TokenAmount},
    errors::guards::*,
};
use std::fmt::{self, Display, Formatter};

/// Minimum pending reward that can be claimed - in whole tokens
pub const MIN_CLAIM_TOKENS: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    AmountNotSet,
    AmountNotPositive,
    InvalidAmount,
    InsufficientWalletBalance,
    InsufficientStakeBalance,
    RewardBelowClaimThreshold,
    NothingToWithdraw,
    UnstakedFundsNotReleased,
    PoolPaused,
}

impl DenyReason {
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::AmountNotSet => AMOUNT_NOT_SET,
            DenyReason::AmountNotPositive => AMOUNT_NOT_POSITIVE,
            DenyReason::InvalidAmount => INVALID_AMOUNT,
            DenyReason::InsufficientWalletBalance => INSUFFICIENT_WALLET_BALANCE,
            DenyReason::InsufficientStakeBalance => INSUFFICIENT_STAKE_BALANCE,
            DenyReason::RewardBelowClaimThreshold => REWARD_BELOW_CLAIM_THRESHOLD,
            DenyReason::NothingToWithdraw => NOTHING_TO_WITHDRAW,
            DenyReason::UnstakedFundsNotReleased => UNSTAKED_FUNDS_NOT_RELEASED,
            DenyReason::PoolPaused => POOL_PAUSED,
        }
    }
}

impl Display for DenyReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Denied(DenyReason),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        *self == GuardDecision::Allowed
    }

    /// returns the first denial
    pub fn and(self, other: GuardDecision) -> GuardDecision {
        match self {
            GuardDecision::Allowed => other,
            denied => denied,
        }
    }

    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            GuardDecision::Allowed => Ok(()),
            GuardDecision::Denied(reason) => Err(reason),
        }
    }
}

fn check_amount(
    amount: Option<TokenAmount>,
    available: TokenAmount,
    insufficient: DenyReason,
) -> GuardDecision {
    match amount {
        None => GuardDecision::Denied(DenyReason::AmountNotSet),
        Some(amount) if amount.is_zero() => GuardDecision::Denied(DenyReason::AmountNotPositive),
        Some(amount) if amount > available => GuardDecision::Denied(insufficient),
        Some(_) => GuardDecision::Allowed,
    }
}

pub fn can_stake(amount: Option<TokenAmount>, wallet_balance: TokenAmount) -> GuardDecision {
    check_amount(amount, wallet_balance, DenyReason::InsufficientWalletBalance)
}

pub fn can_unstake(amount: Option<TokenAmount>, stake_balance: TokenAmount) -> GuardDecision {
    check_amount(amount, stake_balance, DenyReason::InsufficientStakeBalance)
}

/// The pending reward must be at least [MIN_CLAIM_TOKENS] whole tokens.
pub fn can_claim(pending_reward: TokenAmount, decimals: u8) -> GuardDecision {
    // when 1 token does not fit into u128, then no reward can reach it
    let threshold = one_token(decimals)
        .map(|one| U256::from(one.value()) * U256::from(MIN_CLAIM_TOKENS));
    match threshold {
        Some(threshold) if U256::from(pending_reward.value()) >= threshold => {
            GuardDecision::Allowed
        }
        _ => GuardDecision::Denied(DenyReason::RewardBelowClaimThreshold),
    }
}

/// Only the contract reported `can_withdraw` flag is trusted - the locally computed cooldown is
/// never used to gate withdrawals.
pub fn can_withdraw(account: &AccountSnapshot) -> GuardDecision {
    if account.unstake_balance.is_zero() {
        GuardDecision::Denied(DenyReason::NothingToWithdraw)
    } else if !account.can_withdraw {
        GuardDecision::Denied(DenyReason::UnstakedFundsNotReleased)
    } else {
        GuardDecision::Allowed
    }
}

/// Denies stake and unstake while the pool is administratively paused.
pub fn pool_accepts_staking(pool: &PoolSnapshot) -> GuardDecision {
    if pool.is_paused {
        GuardDecision::Denied(DenyReason::PoolPaused)
    } else {
        GuardDecision::Allowed
    }
}
