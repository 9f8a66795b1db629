use crate::{domain::Cooldown, near::DEFAULT_RELEASE_PERIOD_SECS};
use near_sdk::{
    serde::{Deserialize, Serialize},
    serde_json,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde", default)]
pub struct Config {
    /// symbol of the staked token, used to look up the token metadata
    token_symbol: String,
    /// how long unstaked funds are held by the staking contract before they are released
    release_period_secs: u64,
    /// when true, stake and unstake are denied while the pool is paused
    pause_blocks_staking: bool,
    /// advertised APR - informational only
    staking_apr_percent: u32,
}

impl Config {
    pub fn new(token_symbol: &str) -> Self {
        Self {
            token_symbol: token_symbol.to_string(),
            ..Self::default()
        }
    }

    /// fields that are not specified fall back to their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn token_symbol(&self) -> &str {
        &self.token_symbol
    }

    pub fn release_period_secs(&self) -> u64 {
        self.release_period_secs
    }

    pub fn pause_blocks_staking(&self) -> bool {
        self.pause_blocks_staking
    }

    pub fn staking_apr_percent(&self) -> u32 {
        self.staking_apr_percent
    }

    pub fn cooldown(&self) -> Cooldown {
        Cooldown::new(self.release_period_secs)
    }

    pub fn with_release_period_secs(mut self, release_period_secs: u64) -> Self {
        self.release_period_secs = release_period_secs;
        self
    }

    pub fn with_pause_blocks_staking(mut self, pause_blocks_staking: bool) -> Self {
        self.pause_blocks_staking = pause_blocks_staking;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_symbol: "VBIC".to_string(),
            release_period_secs: DEFAULT_RELEASE_PERIOD_SECS,
            pause_blocks_staking: true,
            staking_apr_percent: 18,
        }
    }
}
