/// Dictionary words glued to numbers.
///
/// For every word and every number `n` this yields `word‖n`, `n‖word` and
/// `word‖sep‖n` for each separator, so a word with `K` numbers and `S`
/// separators produces `2K + SK` candidates.
#[derive(Debug, Clone)]
pub struct WordDigitCombinations {
    max_append: u64,
    /// Years at or above `max_append`, deduplicated, in input order.
    extra_years: Vec<u64>,
    separators: Vec<String>,
}

impl WordDigitCombinations {
    /// Numbers are `0..max_append` followed by each of `years` not already in
    /// that range. They are rendered without padding as they are enumerated.
    pub fn new(max_append: u64, years: &[u32], separators: &[String]) -> Self {
        let mut extra_years: Vec<u64> = Vec::new();
        for &year in years {
            let year = u64::from(year);
            if year >= max_append && !extra_years.contains(&year) {
                extra_years.push(year);
            }
        }

        Self { max_append, extra_years, separators: separators.to_vec() }
    }

    /// The numbers tried for every word, in order.
    pub fn numbers(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.max_append).chain(self.extra_years.iter().copied())
    }

    /// Distinct numbers tried per word (`K`).
    pub fn number_count(&self) -> u64 {
        self.max_append + self.extra_years.len() as u64
    }

    pub fn per_word_count(&self) -> u64 {
        (2 + self.separators.len() as u64).saturating_mul(self.number_count())
    }

    pub fn candidate_count(&self, word_count: usize) -> u64 {
        (word_count as u64).saturating_mul(self.per_word_count())
    }

    pub fn candidates_for<'s>(&'s self, word: &'s str) -> impl Iterator<Item = String> + 's {
        self.numbers().flat_map(move |num| {
            let glued = [format!("{word}{num}"), format!("{num}{word}")];
            let separated = self.separators.iter().map(move |sep| format!("{word}{sep}{num}"));
            glued.into_iter().chain(separated)
        })
    }

    pub fn candidates<'s>(&'s self, words: &'s [String]) -> impl Iterator<Item = String> + 's {
        words.iter().flat_map(move |word| self.candidates_for(word))
    }
}
