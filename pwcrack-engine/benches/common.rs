use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generates lowercase dictionary-like words of 4 to 12 letters.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(4..=12);
            (0..length).map(|_| LOWERCASE[rng.gen_range(0..LOWERCASE.len())] as char).collect()
        })
        .collect()
}
