use crate::domain::{BlockTimestamp, Cooldown, TokenAmount, UnstakeStatus};
use near_sdk::AccountId;

/// Latest known balances for the signed in account.
///
/// Snapshots are immutable: every successful refresh replaces the snapshot as a whole.
/// The default snapshot is the empty snapshot used when no account is signed in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountSnapshot {
    /// None when unauthenticated
    pub account_id: Option<AccountId>,
    /// spendable wallet balance - not staked
    pub token_balance: TokenAmount,
    /// principal currently staked
    pub stake_balance: TokenAmount,
    /// principal that has been unstaked, but not yet withdrawn
    pub unstake_balance: TokenAmount,
    /// unclaimed reward
    pub pending_reward: TokenAmount,
    /// zero if there is no pending unstake
    pub start_unstake_timestamp: BlockTimestamp,
    /// reported by the contract - only meaningful when there is an unstake balance
    pub can_withdraw: bool,
}

impl AccountSnapshot {
    pub fn is_empty(&self) -> bool {
        self.account_id.is_none()
    }

    pub fn has_unstaked_funds(&self) -> bool {
        !self.unstake_balance.is_zero()
    }

    /// returns None if there are no unstaked funds pending withdrawal
    pub fn unstake_status(&self, cooldown: &Cooldown) -> Option<UnstakeStatus> {
        if !self.has_unstaked_funds() {
            return None;
        }
        Some(UnstakeStatus {
            amount: self.unstake_balance,
            unstaked_at: self.start_unstake_timestamp.to_epoch_millis(),
            expected_release: cooldown.release_timestamp(self.start_unstake_timestamp),
            can_withdraw: self.can_withdraw,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::EpochMillis;
    use crate::near::NANOS_PER_MILLI;

    #[test]
    fn default_snapshot_is_empty() {
        let snapshot = AccountSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.token_balance, TokenAmount(0));
        assert!(!snapshot.can_withdraw);
        assert!(snapshot.unstake_status(&Cooldown::default()).is_none());
    }

    #[test]
    fn unstake_status_when_funds_are_unstaked() {
        let snapshot = AccountSnapshot {
            account_id: Some("alfio.near".to_string()),
            unstake_balance: 500.into(),
            start_unstake_timestamp: BlockTimestamp(10_000 * NANOS_PER_MILLI),
            can_withdraw: false,
            ..AccountSnapshot::default()
        };
        let status = snapshot.unstake_status(&Cooldown::new(1)).unwrap();
        assert_eq!(status.amount, TokenAmount(500));
        assert_eq!(status.unstaked_at, EpochMillis(10_000));
        assert_eq!(status.expected_release, EpochMillis(11_000));
        assert!(!status.can_withdraw);
        assert!(status.is_released(EpochMillis(11_000)));
    }
}
