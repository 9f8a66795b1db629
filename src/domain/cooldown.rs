use crate::{
    domain::{BlockTimestamp, EpochMillis},
    near::DEFAULT_RELEASE_PERIOD_SECS,
};

/// Computes when unstaked funds are expected to be released by the staking contract.
///
/// NOTE: the computed values are advisory only. The client clock and the chain clock are not
/// synchronized, thus the `can_withdraw` flag reported by the contract is what gates withdrawals.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Cooldown {
    release_period_secs: u64,
}

impl Cooldown {
    pub fn new(release_period_secs: u64) -> Self {
        Self {
            release_period_secs,
        }
    }

    pub fn release_period_secs(&self) -> u64 {
        self.release_period_secs
    }

    /// start timestamp floored to millis + the release period
    pub fn release_timestamp(&self, start_unstake_timestamp: BlockTimestamp) -> EpochMillis {
        start_unstake_timestamp
            .to_epoch_millis()
            .saturating_add_secs(self.release_period_secs)
    }

    pub fn is_released(&self, now: EpochMillis, start_unstake_timestamp: BlockTimestamp) -> bool {
        now >= self.release_timestamp(start_unstake_timestamp)
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::new(DEFAULT_RELEASE_PERIOD_SECS)
    }
}
