//! The live set of digests still being searched for.

use std::collections::HashMap;
use std::sync::Arc;

use compact_str::CompactString;

use crate::cracked::CrackedSet;
use crate::digest::Digest;

/// Opaque token naming the owner of a target digest (e.g. a user id).
pub type Identifier = CompactString;

/// Mapping of digest to identifier that only ever shrinks.
///
/// Keys are canonical by construction: [`Digest`] is parsed from hex of
/// either case into raw bytes, so lookups never care about the case the
/// target file used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    entries: Arc<HashMap<Digest, Identifier>>,
}

/// Point-in-time, read-only view of a [`TargetSet`] shared with workers.
///
/// Removing entries from the set after a snapshot was taken does not affect
/// the snapshot.
#[derive(Debug, Clone)]
pub struct TargetSnapshot {
    entries: Arc<HashMap<Digest, Identifier>>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target during loading. A digest seen twice keeps the latest
    /// identifier.
    pub fn insert(&mut self, digest: Digest, identifier: impl Into<Identifier>) {
        Arc::make_mut(&mut self.entries).insert(digest, identifier.into());
    }

    pub fn contains(&self, digest: &Digest) -> Option<&Identifier> {
        self.entries.get(digest)
    }

    /// Removes a digest after its identifier was recovered.
    pub fn remove(&mut self, digest: &Digest) -> Option<Identifier> {
        // Clones the map only if a snapshot of it is still alive.
        Arc::make_mut(&mut self.entries).remove(digest)
    }

    /// Removes every digest owned by an identifier in `cracked`, including
    /// digests of that identifier no strategy matched. Returns how many
    /// digests were removed.
    pub fn remove_recovered(&mut self, cracked: &CrackedSet) -> usize {
        let before = self.entries.len();
        if self.entries.values().any(|id| cracked.contains(id)) {
            Arc::make_mut(&mut self.entries).retain(|_, id| !cracked.contains(id));
        }
        before - self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn snapshot(&self) -> TargetSnapshot {
        TargetSnapshot { entries: Arc::clone(&self.entries) }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Digest, &Identifier)> {
        self.entries.iter()
    }
}

impl<I: Into<Identifier>> FromIterator<(Digest, I)> for TargetSet {
    fn from_iter<T: IntoIterator<Item = (Digest, I)>>(iter: T) -> Self {
        let entries = iter.into_iter().map(|(d, id)| (d, id.into())).collect();
        Self { entries: Arc::new(entries) }
    }
}

impl TargetSnapshot {
    #[inline]
    pub fn contains(&self, digest: &Digest) -> Option<&Identifier> {
        self.entries.get(digest)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
