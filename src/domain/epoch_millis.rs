use std::time::{SystemTime, UNIX_EPOCH};

/// client wall clock time - milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct EpochMillis(pub u64);

impl From<u64> for EpochMillis {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl EpochMillis {
    /// returns the current client time
    /// - a clock set before the Unix epoch is reported as the epoch
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis() as u64)
            .unwrap_or_default();
        Self(millis)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs.saturating_mul(crate::near::MILLIS_PER_SEC)))
    }
}

impl From<EpochMillis> for u64 {
    fn from(value: EpochMillis) -> Self {
        value.0
    }
}
