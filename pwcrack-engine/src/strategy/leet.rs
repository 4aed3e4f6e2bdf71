/// Character substitutions tried by [`Leetspeak`], in order.
pub const LEET_TABLE: &[(char, &[&str])] = &[
    ('a', &["4", "@"]),
    ('e', &["3"]),
    ('i', &["1", "!"]),
    ('o', &["0"]),
    ('s', &["5", "$"]),
    ('t', &["7"]),
    ('l', &["1"]),
    ('z', &["2"]),
];

/// Single-class leetspeak over the first `word_limit` words.
///
/// Each candidate replaces every occurrence of one table character with one
/// of its alternatives; classes are never mixed, so `password` yields
/// `p4ssword` and `pa55word` but not `p455word`.
#[derive(Debug, Clone, Copy)]
pub struct Leetspeak {
    word_limit: usize,
}

impl Leetspeak {
    pub fn new(word_limit: usize) -> Self {
        Self { word_limit }
    }

    pub fn candidates_for(word: &str) -> impl Iterator<Item = String> + '_ {
        LEET_TABLE
            .iter()
            .filter(move |(ch, _)| word.contains(*ch))
            .flat_map(move |(ch, alternatives)| {
                alternatives.iter().map(move |alt| word.replace(*ch, alt))
            })
    }

    pub fn candidates<'w>(&self, words: &'w [String]) -> impl Iterator<Item = String> + 'w {
        let limit = words.len().min(self.word_limit);
        words[..limit].iter().flat_map(|word| Self::candidates_for(word))
    }

    pub fn candidate_count(&self, words: &[String]) -> u64 {
        let limit = words.len().min(self.word_limit);
        words[..limit]
            .iter()
            .map(|word| {
                LEET_TABLE
                    .iter()
                    .filter(|(ch, _)| word.contains(*ch))
                    .map(|(_, alternatives)| alternatives.len() as u64)
                    .sum::<u64>()
            })
            .sum()
    }
}
