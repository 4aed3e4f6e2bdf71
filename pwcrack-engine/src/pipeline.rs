//! Runs the strategies in order against a shrinking target set.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::EngineConfig;
use crate::cracked::CrackedSet;
use crate::distributor::WorkDistributor;
use crate::error::Error;
use crate::matcher::scan;
use crate::strategy::{
    CommonDates, DictionaryWords, Leetspeak, PureDigits, StrategyKind, Transformations,
    WordDigitCombinations, WordPairCombinations,
};
use crate::target::{TargetSet, TargetSnapshot};

/// What one strategy run achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    pub strategy: StrategyKind,
    /// Identifiers newly recovered by this strategy.
    pub found: usize,
    pub remaining_before: usize,
    pub remaining_after: usize,
    pub elapsed: Duration,
}

/// Final state of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub cracked: CrackedSet,
    pub remaining: TargetSet,
    /// One entry per strategy that ran, in run order.
    pub reports: Vec<StrategyReport>,
}

/// Ordered strategy runner.
///
/// The pipeline owns the worker pool and the configuration; a single
/// pipeline can be run any number of times.
pub struct Pipeline {
    config: EngineConfig,
    distributor: WorkDistributor,
}

impl Pipeline {
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        config.validate()?;
        let distributor = WorkDistributor::new(config.workers)?;
        Ok(Self { config, distributor })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn worker_count(&self) -> usize {
        self.distributor.worker_count()
    }

    /// Runs every configured strategy once, stopping early when no targets
    /// remain.
    ///
    /// Each strategy sees a snapshot of the targets left by the previous one.
    /// Its hits are merged into the cracked set only after it has finished,
    /// and every digest owned by a recovered identifier then leaves the
    /// targets, so an identifier is never attempted again.
    pub fn run(&self, targets: TargetSet, dictionary: &[String]) -> Result<PipelineOutcome, Error> {
        let mut remaining = targets;
        let mut cracked = CrackedSet::new();
        let mut reports = Vec::with_capacity(self.config.strategies.len());

        for &strategy in &self.config.strategies {
            if remaining.is_empty() {
                info!(next = %strategy, "all targets recovered, skipping remaining strategies");
                break;
            }

            let started = Instant::now();
            let remaining_before = remaining.len();
            info!(%strategy, remaining = remaining_before, "running strategy");

            let found = self.run_strategy(strategy, &remaining.snapshot(), dictionary)?;
            let cracked_before = cracked.len();
            cracked.merge(found)?;
            remaining.remove_recovered(&cracked);

            let report = StrategyReport {
                strategy,
                found: cracked.len() - cracked_before,
                remaining_before,
                remaining_after: remaining.len(),
                elapsed: started.elapsed(),
            };
            info!(
                %strategy,
                found = report.found,
                remaining = report.remaining_after,
                elapsed_ms = report.elapsed.as_millis() as u64,
                "strategy finished"
            );
            reports.push(report);
        }

        Ok(PipelineOutcome { cracked, remaining, reports })
    }

    /// Runs one strategy against a fixed snapshot. Only the two combination
    /// strategies go through the worker pool.
    pub fn run_strategy(
        &self,
        strategy: StrategyKind,
        targets: &TargetSnapshot,
        dictionary: &[String],
    ) -> Result<CrackedSet, Error> {
        let config = &self.config;
        match strategy {
            StrategyKind::PureDigits => {
                let digits = PureDigits::new(config.max_digit_len);
                info!(
                    candidates = digits.candidate_count(),
                    max_len = config.max_digit_len,
                    "trying pure digits"
                );
                scan(digits.candidates(), targets)
            }
            StrategyKind::CommonDates => {
                let dates = CommonDates::new(config.date_years.clone());
                info!(candidates = dates.candidate_count(), "trying date formats");
                scan(dates.candidates(), targets)
            }
            StrategyKind::DictionaryWords => {
                let words = DictionaryWords::new(dictionary);
                info!(candidates = words.candidate_count(), "trying dictionary words");
                scan(words.candidates(), targets)
            }
            StrategyKind::Transformations => {
                let transforms = Transformations::new(dictionary);
                info!(candidates = transforms.candidate_count(), "applying transformations");
                scan(transforms.candidates(), targets)
            }
            StrategyKind::WordDigitCombinations => {
                let combos = WordDigitCombinations::new(
                    config.max_append,
                    &config.common_years,
                    &config.separators,
                );
                info!(
                    candidates = combos.candidate_count(dictionary.len()),
                    workers = self.worker_count(),
                    "trying words with numbers"
                );
                self.distributor.distribute(dictionary, targets, |chunk, snapshot| {
                    scan(combos.candidates(chunk), snapshot)
                })
            }
            StrategyKind::Leetspeak => {
                let leet = Leetspeak::new(config.leet_word_limit);
                info!(candidates = leet.candidate_count(dictionary), "applying leetspeak");
                scan(leet.candidates(dictionary), targets)
            }
            StrategyKind::WordPairCombinations => {
                let combos = WordPairCombinations::new(&config.separators, config.pair_word_limit);
                let pairs = combos.pairs(dictionary);
                info!(
                    pairs = pairs.len(),
                    candidates = combos.candidate_count(dictionary.len()),
                    workers = self.worker_count(),
                    "trying word pairs"
                );
                self.distributor.distribute(&pairs, targets, |chunk, snapshot| {
                    scan(combos.candidates(chunk), snapshot)
                })
            }
        }
    }
}
