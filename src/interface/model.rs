//! JSON view model returned by the contracts
//!
//! u128 and u64 values are encoded as strings, which is how NEAR contracts return them.

use crate::domain;
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct TokenAmount(pub U128);

impl From<domain::TokenAmount> for TokenAmount {
    fn from(value: domain::TokenAmount) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl From<TokenAmount> for domain::TokenAmount {
    fn from(value: TokenAmount) -> Self {
        value.value().into()
    }
}

impl TokenAmount {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

impl Default for TokenAmount {
    fn default() -> Self {
        Self(U128(0))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct BlockTimestamp(pub U64);

impl From<u64> for BlockTimestamp {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<BlockTimestamp> for domain::BlockTimestamp {
    fn from(value: BlockTimestamp) -> Self {
        value.value().into()
    }
}

impl BlockTimestamp {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

impl Default for BlockTimestamp {
    fn default() -> Self {
        Self(U64(0))
    }
}

/// View model for an account registered with the staking contract, i.e., `get_account_info`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(crate = "near_sdk::serde")]
pub struct StakingAccountView {
    pub stake_balance: TokenAmount,
    /// funds that have been unstaked and are waiting to be released
    pub unstake_balance: TokenAmount,
    pub reward: TokenAmount,
    /// nanos - zero if nothing has been unstaked
    pub start_unstake_timestamp: BlockTimestamp,
    pub can_withdraw: bool,
}

impl StakingAccountView {
    /// combines the staking account info with the account wallet balance
    pub fn into_snapshot(
        self,
        account_id: AccountId,
        token_balance: TokenAmount,
    ) -> domain::AccountSnapshot {
        domain::AccountSnapshot {
            account_id: Some(account_id),
            token_balance: token_balance.into(),
            stake_balance: self.stake_balance.into(),
            unstake_balance: self.unstake_balance.into(),
            pending_reward: self.reward.into(),
            start_unstake_timestamp: self.start_unstake_timestamp.into(),
            can_withdraw: self.can_withdraw,
        }
    }
}

/// View model for the staking pool, i.e., `get_pool_info`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolInfoView {
    pub total_stake_balance: TokenAmount,
    pub total_reward: TokenAmount,
    pub total_stakers: U64,
    pub is_paused: bool,
}

impl Default for PoolInfoView {
    fn default() -> Self {
        Self {
            total_stake_balance: TokenAmount::default(),
            total_reward: TokenAmount::default(),
            total_stakers: U64(0),
            is_paused: false,
        }
    }
}

impl From<PoolInfoView> for domain::PoolSnapshot {
    fn from(view: PoolInfoView) -> Self {
        Self {
            total_stake_balance: view.total_stake_balance.into(),
            total_reward: view.total_reward.into(),
            total_stakers: view.total_stakers.0,
            is_paused: view.is_paused,
        }
    }
}
