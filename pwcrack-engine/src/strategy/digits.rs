/// Every zero-padded decimal string of width 1 through `max_len`.
///
/// Ordered by width, then by value: `0..9`, `00..99`, `000..999`, ...
#[derive(Debug, Clone, Copy)]
pub struct PureDigits {
    max_len: u32,
}

impl PureDigits {
    /// `max_len` must not exceed 19 so that `10^max_len` fits in a `u64`;
    /// [`EngineConfig::validate`](crate::EngineConfig::validate) enforces this.
    pub fn new(max_len: u32) -> Self {
        Self { max_len }
    }

    /// All candidates of exactly `len` digits.
    pub fn of_length(len: u32) -> impl Iterator<Item = String> {
        let width = len as usize;
        (0..10u64.pow(len)).map(move |n| format!("{n:0width$}"))
    }

    pub fn candidates(&self) -> impl Iterator<Item = String> + use<> {
        (1..=self.max_len).flat_map(Self::of_length)
    }

    pub fn candidate_count(&self) -> u64 {
        (1..=self.max_len).map(|len| 10u64.pow(len)).sum()
    }
}
