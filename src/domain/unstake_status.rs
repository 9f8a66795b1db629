use crate::domain::{EpochMillis, TokenAmount};

/// Withdrawal view for funds that have been unstaked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnstakeStatus {
    pub amount: TokenAmount,
    pub unstaked_at: EpochMillis,
    pub expected_release: EpochMillis,
    /// authoritative flag reported by the contract
    pub can_withdraw: bool,
}

impl UnstakeStatus {
    /// Locally computed release check using the client clock.
    ///
    /// Use it for display only. The value may disagree with [UnstakeStatus::can_withdraw] near the
    /// release boundary because of clock skew between the client and the chain.
    pub fn is_released(&self, now: EpochMillis) -> bool {
        now >= self.expected_release
    }
}
