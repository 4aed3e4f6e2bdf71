/// The dictionary, verbatim.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryWords<'a> {
    words: &'a [String],
}

impl<'a> DictionaryWords<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self { words }
    }

    pub fn candidates(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        let words = self.words;
        words.iter().map(String::as_str)
    }

    pub fn candidate_count(&self) -> u64 {
        self.words.len() as u64
    }
}
