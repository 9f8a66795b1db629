//! defines the internal domain model used by the staking client
//!
//! NOTE: the domain model is separate from the interface model, which mirrors the JSON returned by
//! the contracts. Interface values are converted into domain values when a snapshot is refreshed.

mod account_snapshot;
mod action;
mod block_timestamp;
mod cooldown;
mod epoch_millis;
mod pool_snapshot;
mod token_amount;
mod token_metadata;
mod unstake_status;

pub use account_snapshot::AccountSnapshot;
pub use action::{ActionKind, ActionState};
pub use block_timestamp::BlockTimestamp;
pub use cooldown::Cooldown;
pub use epoch_millis::EpochMillis;
pub use pool_snapshot::{PoolSnapshot, PoolStatus};
pub use token_amount::TokenAmount;
pub use token_metadata::TokenMetadata;
pub use unstake_status::UnstakeStatus;
