//! Checks candidates against a target snapshot.

use tracing::info;

use crate::cracked::CrackedSet;
use crate::digest::Digest;
use crate::error::Error;
use crate::target::{Identifier, TargetSnapshot};

/// Hashes `candidate` and looks it up in `targets`.
///
/// Returns the owning identifier and the candidate on a hit. Never mutates
/// anything; callers merge hits and remove them from the live set.
#[inline]
pub fn check(candidate: &str, targets: &TargetSnapshot) -> Option<(Identifier, String)> {
    targets
        .contains(&Digest::of(candidate))
        .map(|identifier| (identifier.clone(), candidate.to_string()))
}

/// Checks every candidate and collects the hits, in candidate order. An
/// identifier that owns several digests keeps its first hit.
pub fn scan<I, S>(candidates: I, targets: &TargetSnapshot) -> Result<CrackedSet, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cracked = CrackedSet::new();
    if targets.is_empty() {
        return Ok(cracked);
    }

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let digest = Digest::of(candidate);
        if let Some(identifier) = targets.contains(&digest) {
            if cracked.insert(identifier.clone(), digest, candidate.to_string())? {
                info!(%identifier, plaintext = candidate, "cracked");
            }
        }
    }

    Ok(cracked)
}
