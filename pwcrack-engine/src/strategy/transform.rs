use tracing::debug;

/// Per-word rewrites tried by the transformation strategy.
///
/// Each transform is applied to the original word on its own; they are never
/// chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// `dragon` -> `Dragon`, `dRAGON` -> `Dragon`. The first character is
    /// uppercased, not titlecased, so digraphs like `ǆ` become `Ǆ`, not `ǅ`.
    Capitalize,
    Uppercase,
    Reverse,
    /// `cat` -> `catcat`.
    Duplicate,
    /// Drops every character that is not alphanumeric. May leave `""`, which
    /// is still a candidate.
    StripNonAlphanumeric,
}

/// Why a transform produced no candidate for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransformSkip {
    #[error("empty input word")]
    EmptyInput,
}

impl Transform {
    pub const ALL: [Transform; 5] = [
        Transform::Capitalize,
        Transform::Uppercase,
        Transform::Reverse,
        Transform::Duplicate,
        Transform::StripNonAlphanumeric,
    ];

    pub fn apply(self, word: &str) -> Result<String, TransformSkip> {
        if word.is_empty() {
            return Err(TransformSkip::EmptyInput);
        }

        let candidate = match self {
            Transform::Capitalize => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                    }
                    None => String::new(),
                }
            }
            Transform::Uppercase => word.to_uppercase(),
            Transform::Reverse => word.chars().rev().collect(),
            Transform::Duplicate => word.repeat(2),
            Transform::StripNonAlphanumeric => {
                word.chars().filter(|c| c.is_alphanumeric()).collect()
            }
        };

        Ok(candidate)
    }
}

/// Every transform in [`Transform::ALL`] applied to every dictionary word.
#[derive(Debug, Clone, Copy)]
pub struct Transformations<'a> {
    words: &'a [String],
}

impl<'a> Transformations<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self { words }
    }

    /// Skipped transforms are logged and dropped; the remaining transforms
    /// for that word still run.
    pub fn candidates(&self) -> impl Iterator<Item = String> + use<'a> {
        let words = self.words;
        words.iter().flat_map(|word| {
            Transform::ALL.into_iter().filter_map(move |transform| match transform.apply(word) {
                Ok(candidate) => Some(candidate),
                Err(reason) => {
                    debug!(%word, ?transform, %reason, "transform skipped");
                    None
                }
            })
        })
    }

    /// Upper bound: empty words yield no candidates.
    pub fn candidate_count(&self) -> u64 {
        (self.words.len() * Transform::ALL.len()) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_each_transform() {
        assert_eq!(Transform::Capitalize.apply("dragon").unwrap(), "Dragon");
        assert_eq!(Transform::Capitalize.apply("dRAGON").unwrap(), "Dragon");
        assert_eq!(Transform::Uppercase.apply("dragon").unwrap(), "DRAGON");
        assert_eq!(Transform::Reverse.apply("dragon").unwrap(), "nogard");
        assert_eq!(Transform::Duplicate.apply("cat").unwrap(), "catcat");
        assert_eq!(Transform::StripNonAlphanumeric.apply("p@ss-w0rd!").unwrap(), "pssw0rd");
    }

    #[test]
    fn test_apply_handles_multibyte() {
        assert_eq!(Transform::Reverse.apply("héllo").unwrap(), "olléh");
        assert_eq!(Transform::Capitalize.apply("élan").unwrap(), "Élan");
        assert_eq!(Transform::Capitalize.apply("ǆem").unwrap(), "\u{01C4}em");
    }

    #[test]
    fn test_skip_reasons() {
        assert_eq!(Transform::Reverse.apply(""), Err(TransformSkip::EmptyInput));
        assert_eq!(Transform::Capitalize.apply(""), Err(TransformSkip::EmptyInput));
        assert_eq!(Transform::StripNonAlphanumeric.apply("!!!").unwrap(), "");
    }

    #[test]
    fn test_skip_does_not_abort_other_words() {
        let words = vec!["!?".to_string(), String::new(), "ab".to_string()];
        let candidates: Vec<String> = Transformations::new(&words).candidates().collect();
        assert_eq!(candidates, ["!?", "!?", "?!", "!?!?", "", "Ab", "AB", "ba", "abab", "ab"]);
    }

    #[test]
    fn test_stripped_to_empty_is_still_checked() {
        use crate::digest::digest;
        use crate::matcher::scan;
        use crate::target::TargetSet;

        let targets: TargetSet = [(digest(""), "1")].into_iter().collect();
        let words = vec!["!!!".to_string()];

        let cracked = scan(Transformations::new(&words).candidates(), &targets.snapshot()).unwrap();

        assert_eq!(cracked.get("1"), Some(""));
    }
}
