//! Candidate generators.
//!
//! Every generator is a plain value built from configuration. Calling
//! `candidates` yields a fresh lazy iterator each time, so the same generator
//! can be enumerated any number of times with identical output.

mod dates;
mod digits;
mod leet;
mod transform;
mod word_digit;
mod word_pair;
mod words;

use std::fmt;
use std::str::FromStr;

pub use dates::CommonDates;
pub use digits::PureDigits;
pub use leet::{LEET_TABLE, Leetspeak};
pub use transform::{Transform, TransformSkip, Transformations};
pub use word_digit::WordDigitCombinations;
pub use word_pair::WordPairCombinations;
pub use words::DictionaryWords;

use crate::error::Error;

/// The candidate families, in default run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    PureDigits,
    CommonDates,
    DictionaryWords,
    Transformations,
    WordDigitCombinations,
    Leetspeak,
    WordPairCombinations,
}

impl StrategyKind {
    /// Cheapest first; word pairs are by far the largest space and run last.
    pub const DEFAULT_ORDER: [StrategyKind; 7] = [
        StrategyKind::PureDigits,
        StrategyKind::CommonDates,
        StrategyKind::DictionaryWords,
        StrategyKind::Transformations,
        StrategyKind::WordDigitCombinations,
        StrategyKind::Leetspeak,
        StrategyKind::WordPairCombinations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::PureDigits => "pure-digits",
            StrategyKind::CommonDates => "common-dates",
            StrategyKind::DictionaryWords => "dictionary-words",
            StrategyKind::Transformations => "transformations",
            StrategyKind::WordDigitCombinations => "word-digit",
            StrategyKind::Leetspeak => "leetspeak",
            StrategyKind::WordPairCombinations => "word-pairs",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DEFAULT_ORDER
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in StrategyKind::DEFAULT_ORDER {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
        assert_eq!(" Word-Pairs ".parse::<StrategyKind>().unwrap(), StrategyKind::WordPairCombinations);
        assert!("rainbow-tables".parse::<StrategyKind>().is_err());
    }
}
