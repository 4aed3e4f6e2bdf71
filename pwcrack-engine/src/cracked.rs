//! Recovered identifier/plaintext pairs.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::digest::Digest;
use crate::error::Error;
use crate::target::Identifier;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Recovered {
    plaintext: String,
    /// The target digest the plaintext matched.
    digest: Digest,
}

/// Identifier to recovered plaintext. Grows monotonically and each identifier
/// is written at most once: the first recorded match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrackedSet {
    entries: HashMap<Identifier, Recovered>,
}

impl CrackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `plaintext` matched the target `digest` owned by
    /// `identifier`. Returns whether the identifier was newly recovered.
    ///
    /// An identifier may own several target digests; once one of them is
    /// recovered, later matches for its other digests are ignored. Two
    /// different plaintexts for the same digest is an invariant violation
    /// and is reported rather than overwritten.
    pub fn insert(
        &mut self,
        identifier: Identifier,
        digest: Digest,
        plaintext: String,
    ) -> Result<bool, Error> {
        match self.entries.get(&identifier) {
            None => {
                self.entries.insert(identifier, Recovered { plaintext, digest });
                Ok(true)
            }
            Some(existing) if existing.digest == digest && existing.plaintext != plaintext => {
                Err(Error::ConflictingPlaintext {
                    identifier,
                    existing: existing.plaintext.clone(),
                    incoming: plaintext,
                })
            }
            Some(_) => Ok(false),
        }
    }

    /// Key union of `other` into `self`. Identifiers already present keep
    /// their plaintext, so merging partial results in a fixed order gives a
    /// fixed outcome.
    pub fn merge(&mut self, other: CrackedSet) -> Result<(), Error> {
        for (identifier, recovered) in other.entries {
            self.insert(identifier, recovered.digest, recovered.plaintext)?;
        }
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(|r| r.plaintext.as_str())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &str)> {
        self.entries.iter().map(|(id, r)| (id, r.plaintext.as_str()))
    }

    /// Pairs ordered for persistence, see [`identifier_order`].
    pub fn sorted(&self) -> Vec<(&Identifier, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| identifier_order(a.0, b.0));
        pairs
    }
}

/// Numeric identifiers sort by value and before any non-numeric identifier;
/// the rest sort lexicographically.
pub fn identifier_order(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => {
            let (ta, tb) = (a.trim_start_matches('0'), b.trim_start_matches('0'));
            ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb)).then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::digest;

    fn hit(set: &mut CrackedSet, id: &str, plaintext: &str) -> Result<bool, Error> {
        set.insert(id.into(), digest(plaintext), plaintext.to_string())
    }

    #[test]
    fn test_insert_same_plaintext_twice() {
        let mut cracked = CrackedSet::new();
        assert!(hit(&mut cracked, "u1", "dragon").unwrap());
        assert!(!hit(&mut cracked, "u1", "dragon").unwrap());
        assert_eq!(cracked.len(), 1);
        assert_eq!(cracked.get("u1"), Some("dragon"));
    }

    #[test]
    fn test_first_match_wins_across_digests() {
        // One identifier owning two target digests.
        let mut cracked = CrackedSet::new();
        assert!(hit(&mut cracked, "u1", "42").unwrap());
        assert!(!hit(&mut cracked, "u1", "dragon").unwrap());
        assert_eq!(cracked.get("u1"), Some("42"));
    }

    #[test]
    fn test_two_plaintexts_for_one_digest_is_an_error() {
        let mut cracked = CrackedSet::new();
        let shared = digest("dragon");
        cracked.insert("u1".into(), shared, "dragon".into()).unwrap();
        let err = cracked.insert("u1".into(), shared, "wyvern".into()).unwrap_err();
        assert!(matches!(err, Error::ConflictingPlaintext { .. }));
        assert_eq!(cracked.get("u1"), Some("dragon"));
    }

    #[test]
    fn test_merge_disjoint_is_commutative() {
        let mut a = CrackedSet::new();
        hit(&mut a, "1", "one").unwrap();
        let mut b = CrackedSet::new();
        hit(&mut b, "2", "two").unwrap();

        let mut ab = a.clone();
        ab.merge(b.clone()).unwrap();
        let mut ba = b;
        ba.merge(a).unwrap();

        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 2);
    }

    #[test]
    fn test_merge_keeps_earlier_plaintext() {
        let mut earlier = CrackedSet::new();
        hit(&mut earlier, "1", "one").unwrap();
        let mut later = CrackedSet::new();
        hit(&mut later, "1", "uno").unwrap();

        earlier.merge(later).unwrap();
        assert_eq!(earlier.get("1"), Some("one"));
    }

    #[test]
    fn test_merge_detects_conflict() {
        let shared = digest("one");
        let mut a = CrackedSet::new();
        a.insert("1".into(), shared, "one".into()).unwrap();
        let mut b = CrackedSet::new();
        b.insert("1".into(), shared, "uno".into()).unwrap();
        assert!(a.merge(b).is_err());
    }

    #[test]
    fn test_sorted_numeric_then_lexicographic() {
        let mut cracked = CrackedSet::new();
        for id in ["10", "bob", "2", "alice", "1", "007"] {
            hit(&mut cracked, id, &format!("pw-{id}")).unwrap();
        }
        let order: Vec<&str> = cracked.sorted().into_iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, ["1", "2", "007", "10", "alice", "bob"]);
    }
}
