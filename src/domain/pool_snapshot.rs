use crate::domain::TokenAmount;
use std::fmt::{self, Display, Formatter};

/// Global staking pool stats
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolSnapshot {
    pub total_stake_balance: TokenAmount,
    pub total_reward: TokenAmount,
    pub total_stakers: u64,
    pub is_paused: bool,
}

impl PoolSnapshot {
    pub fn status(&self) -> PoolStatus {
        if self.is_paused {
            PoolStatus::Paused
        } else {
            PoolStatus::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolStatus {
    Active,
    Paused,
}

impl Display for PoolStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PoolStatus::Active => f.write_str("Active"),
            PoolStatus::Paused => f.write_str("Paused"),
        }
    }
}
