//! Offline recovery of plaintexts behind SHA-1 password digests.
//!
//! A [`Pipeline`] runs a fixed sequence of candidate strategies (numeric
//! PINs, dates, dictionary words, mangled words, word+number and word+word
//! combinations, leetspeak) against a [`TargetSet`]. Each strategy sees only
//! the digests the previous ones left unmatched, and every hit is recorded in
//! a [`CrackedSet`].
//!
//! The two combination strategies dominate the candidate count, so they are
//! split into balanced chunks and run on a worker pool by the
//! [`WorkDistributor`]. Workers only read a snapshot of the targets taken
//! before the strategy starts; the pipeline applies removals afterwards on a
//! single thread.
//!
//! ```no_run
//! use pwcrack_engine::{Digest, EngineConfig, Pipeline, TargetSet};
//!
//! let mut targets = TargetSet::new();
//! targets.insert(Digest::of("dragon123"), "1");
//! let dictionary = vec!["dragon".to_string()];
//!
//! let pipeline = Pipeline::new(EngineConfig::default())?;
//! let outcome = pipeline.run(targets, &dictionary)?;
//! assert_eq!(outcome.cracked.get("1"), Some("dragon123"));
//! # Ok::<(), pwcrack_engine::Error>(())
//! ```

pub mod config;
pub mod cracked;
pub mod digest;
pub mod distributor;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod strategy;
pub mod target;

pub use config::EngineConfig;
pub use cracked::{CrackedSet, identifier_order};
pub use digest::{Digest, digest};
pub use distributor::{WorkDistributor, split_ranges};
pub use error::Error;
pub use matcher::{check, scan};
pub use pipeline::{Pipeline, PipelineOutcome, StrategyReport};
pub use strategy::StrategyKind;
pub use target::{Identifier, TargetSet, TargetSnapshot};
