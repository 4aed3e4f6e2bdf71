//! Balanced chunked fan-out over a worker pool.

use std::ops::Range;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::cracked::CrackedSet;
use crate::error::Error;
use crate::target::TargetSnapshot;

/// Splits `len` items into `parts` contiguous ranges whose sizes differ by at
/// most one. The ranges are in order, never overlap and cover `0..len`
/// exactly. Earlier ranges take the remainder.
pub fn split_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let (base, extra) = (len / parts, len % parts);
    (0..parts)
        .map(|i| {
            let start = i * base + i.min(extra);
            let end = (i + 1) * base + (i + 1).min(extra);
            start..end
        })
        .collect()
}

/// Runs chunks of an ordered collection on a fixed-size pool and merges the
/// partial results.
pub struct WorkDistributor {
    pool: ThreadPool,
}

impl WorkDistributor {
    /// `workers == 0` sizes the pool to the available hardware parallelism.
    pub fn new(workers: usize) -> Result<Self, Error> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("pwcrack-worker-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Splits `items` into one chunk per worker and runs `work` on each chunk
    /// against the same `targets` snapshot.
    ///
    /// Chunks may finish in any order, but partial results are merged in
    /// chunk order, so an identifier hit in two chunks keeps the hit from the
    /// earlier chunk. Two plaintexts for one digest are returned as an error.
    pub fn distribute<T, F>(
        &self,
        items: &[T],
        targets: &TargetSnapshot,
        work: F,
    ) -> Result<CrackedSet, Error>
    where
        T: Sync,
        F: Fn(&[T], &TargetSnapshot) -> Result<CrackedSet, Error> + Sync,
    {
        let ranges = split_ranges(items.len(), self.worker_count());
        debug!(items = items.len(), chunks = ranges.len(), "distributing work");

        let partials: Vec<Result<CrackedSet, Error>> = self.pool.install(|| {
            ranges.into_par_iter().map(|range| work(&items[range], targets)).collect()
        });

        let mut merged = CrackedSet::new();
        for partial in partials {
            merged.merge(partial?)?;
        }
        Ok(merged)
    }
}
