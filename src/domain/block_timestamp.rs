use crate::{domain::EpochMillis, near::NANOS_PER_MILLI};

/// NEAR block timestamp - nanoseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct BlockTimestamp(pub u64);

impl From<u64> for BlockTimestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl BlockTimestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// truncates to millisecond precision
    pub fn to_epoch_millis(&self) -> EpochMillis {
        EpochMillis(self.0 / NANOS_PER_MILLI)
    }
}

impl From<BlockTimestamp> for u64 {
    fn from(value: BlockTimestamp) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn to_epoch_millis_floors() {
        assert_eq!(BlockTimestamp(1_999_999).to_epoch_millis(), EpochMillis(1));
        assert_eq!(BlockTimestamp(2_000_000).to_epoch_millis(), EpochMillis(2));
        assert_eq!(BlockTimestamp(0).to_epoch_millis(), EpochMillis(0));
    }
}
