//! Host configuration from `BLOCKFALL_*` environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Randomizer;

pub const DEFAULT_STORE_PATH: &str = "blockfall-scores.json";
pub const DEFAULT_LOG_PATH: &str = "blockfall.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed; `None` derives one from the clock.
    pub seed: Option<u32>,
    pub randomizer: Randomizer,
    pub store_path: PathBuf,
    pub log_path: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            randomizer: Randomizer::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable or blank values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        Self {
            seed: get("BLOCKFALL_SEED").and_then(|s| s.parse().ok()),
            randomizer: get("BLOCKFALL_RANDOMIZER")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.randomizer),
            store_path: get("BLOCKFALL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            log_path: get("BLOCKFALL_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            log_filter: get("BLOCKFALL_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// The configured seed, or one taken from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
