/// YOCTO = 10^24
pub const YOCTO: u128 = 1_000_000_000_000_000_000_000_000;

/// NEAR block timestamps are reported in nanoseconds
pub const NANOS_PER_MILLI: u64 = 1_000_000;

pub const MILLIS_PER_SEC: u64 = 1_000;

/// how long unstaked funds are held by the staking contract before they can be withdrawn
/// - the contract releases funds after 1 epoch, which is ~12 hrs
pub const DEFAULT_RELEASE_PERIOD_SECS: u64 = 43_200;
