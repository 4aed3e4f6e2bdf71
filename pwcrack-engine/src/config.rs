use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::error::Error;
use crate::strategy::StrategyKind;

/// Largest digit length whose `10^len` still fits in a `u64`.
pub const MAX_SUPPORTED_DIGIT_LEN: u32 = 19;

/// Construction-time parameters of a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Pure digit candidates are tried for every length `1..=max_digit_len`.
    pub max_digit_len: u32,
    /// Numbers `0..max_append` are glued to dictionary words.
    pub max_append: u64,
    /// Years glued to dictionary words in addition to `0..max_append`.
    pub common_years: Vec<u32>,
    /// Years enumerated by the date strategy.
    pub date_years: RangeInclusive<u32>,
    /// Separators for word+number and word+word candidates. May include "".
    pub separators: Vec<String>,
    /// Leading dictionary words considered for word pairs.
    pub pair_word_limit: usize,
    /// Leading dictionary words considered for leetspeak.
    pub leet_word_limit: usize,
    /// Worker threads for the parallel strategies. 0 means one per core.
    pub workers: usize,
    /// Strategies to run, in order.
    pub strategies: Vec<StrategyKind>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_digit_len: 8,
            max_append: 10_000,
            common_years: (1980..=2024).collect(),
            date_years: 1950..=2024,
            separators: ["", ".", "_", "-"].into_iter().map(String::from).collect(),
            pair_word_limit: 1000,
            leet_word_limit: 500,
            workers: 0,
            strategies: StrategyKind::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_digit_len > MAX_SUPPORTED_DIGIT_LEN {
            return Err(Error::InvalidConfig(format!(
                "max digit length {} exceeds {}",
                self.max_digit_len, MAX_SUPPORTED_DIGIT_LEN
            )));
        }

        if self.date_years.start() > self.date_years.end() {
            return Err(Error::InvalidConfig(format!(
                "date year range {}..={} is inverted",
                self.date_years.start(),
                self.date_years.end()
            )));
        }

        if self.strategies.is_empty() {
            return Err(Error::InvalidConfig("no strategies selected".into()));
        }

        let mut seen = HashSet::new();
        for kind in &self.strategies {
            if !seen.insert(kind) {
                return Err(Error::InvalidConfig(format!("strategy {kind} listed twice")));
            }
        }

        Ok(())
    }
}
