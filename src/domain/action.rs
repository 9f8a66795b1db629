use std::fmt::{self, Display, Formatter};

/// User actions that are submitted to the staking contract
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ActionKind {
    Stake,
    Unstake,
    Claim,
    Withdraw,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Stake,
        ActionKind::Unstake,
        ActionKind::Claim,
        ActionKind::Withdraw,
    ];

    pub(crate) fn index(&self) -> usize {
        match self {
            ActionKind::Stake => 0,
            ActionKind::Unstake => 1,
            ActionKind::Claim => 2,
            ActionKind::Withdraw => 3,
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Stake => "stake",
            ActionKind::Unstake => "unstake",
            ActionKind::Claim => "claim",
            ActionKind::Withdraw => "withdraw",
        };
        f.write_str(name)
    }
}

/// Submission state per [ActionKind].
///
/// Idle -> Submitting -> Succeeded | Failed
///
/// [ActionState::Succeeded] and [ActionState::Failed] are kept as the last outcome until the next
/// attempt of the same action kind, which starts from [ActionState::Idle]. There is no automatic
/// return to [ActionState::Idle] after an outcome; only a new attempt or sign out clears it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ActionState {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl Default for ActionState {
    fn default() -> Self {
        ActionState::Idle
    }
}

impl ActionState {
    pub fn is_submitting(&self) -> bool {
        *self == ActionState::Submitting
    }
}
