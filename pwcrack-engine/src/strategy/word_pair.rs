/// Two dictionary words joined by a separator, in both orders.
///
/// Only the first `word_limit` words are paired. With `n` words and `S`
/// separators this yields `C(n, 2) * 2S` candidates.
#[derive(Debug, Clone)]
pub struct WordPairCombinations {
    separators: Vec<String>,
    word_limit: usize,
}

impl WordPairCombinations {
    pub fn new(separators: &[String], word_limit: usize) -> Self {
        Self { separators: separators.to_vec(), word_limit }
    }

    /// The leading slice of the dictionary that gets paired.
    pub fn common_words<'w>(&self, words: &'w [String]) -> &'w [String] {
        &words[..words.len().min(self.word_limit)]
    }

    /// Every unordered pair of distinct positions, `(i, j)` with `i < j`, in
    /// lexicographic order of positions.
    pub fn pairs<'w>(&self, words: &'w [String]) -> Vec<(&'w str, &'w str)> {
        let common = self.common_words(words);
        let n = common.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for (i, first) in common.iter().enumerate() {
            for second in &common[i + 1..] {
                pairs.push((first.as_str(), second.as_str()));
            }
        }
        pairs
    }

    pub fn candidates_for_pair<'s>(
        &'s self,
        (first, second): (&'s str, &'s str),
    ) -> impl Iterator<Item = String> + 's {
        self.separators
            .iter()
            .flat_map(move |sep| [format!("{first}{sep}{second}"), format!("{second}{sep}{first}")])
    }

    pub fn candidates<'s>(
        &'s self,
        pairs: &'s [(&'s str, &'s str)],
    ) -> impl Iterator<Item = String> + 's {
        pairs.iter().flat_map(move |&pair| self.candidates_for_pair(pair))
    }

    pub fn candidate_count(&self, word_count: usize) -> u64 {
        let n = word_count.min(self.word_limit) as u64;
        n * n.saturating_sub(1) / 2 * 2 * self.separators.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_count() {
        let words = strings(&["a", "b", "c", "d", "e"]);
        let combos = WordPairCombinations::new(&strings(&["", "-"]), 1000);
        let pairs = combos.pairs(&words);
        assert_eq!(pairs.len(), 10);
        assert_eq!(pairs[0], ("a", "b"));
        assert_eq!(pairs[9], ("d", "e"));

        let candidates: Vec<String> = combos.candidates(&pairs).collect();
        assert_eq!(candidates.len(), 10 * 2 * 2);
        assert_eq!(combos.candidate_count(words.len()), 40);
    }

    #[test]
    fn test_word_limit() {
        let words = strings(&["red", "green", "blue", "black"]);
        let combos = WordPairCombinations::new(&strings(&["_"]), 3);
        assert_eq!(combos.common_words(&words).len(), 3);

        let candidates: Vec<String> = combos.candidates(&combos.pairs(&words)).collect();
        assert_eq!(
            candidates,
            ["red_green", "green_red", "red_blue", "blue_red", "green_blue", "blue_green"]
        );
        assert_eq!(combos.candidate_count(words.len()), 6);
    }

    #[test]
    fn test_too_few_words() {
        let combos = WordPairCombinations::new(&strings(&["", "."]), 1000);
        assert!(combos.pairs(&[]).is_empty());
        assert!(combos.pairs(&strings(&["solo"])).is_empty());
        assert_eq!(combos.candidate_count(1), 0);
    }
}
