use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use pwcrack_engine::CrackedSet;

/// Writes `<identifier> <plaintext>` lines sorted by identifier.
pub fn write_results(path: &Path, cracked: &CrackedSet) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    format_results(&mut writer, cracked)?;
    writer.flush()
}

pub fn format_results<W: Write>(writer: &mut W, cracked: &CrackedSet) -> std::io::Result<()> {
    for (identifier, plaintext) in cracked.sorted() {
        writeln!(writer, "{identifier} {plaintext}")?;
    }
    Ok(())
}

/// End of run statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub elapsed: Duration,
    pub loaded: usize,
    pub cracked: usize,
    pub remaining: usize,
}

impl Summary {
    /// Percentage of loaded targets that were recovered; 0 with no targets.
    pub fn success_rate(&self) -> f64 {
        if self.loaded == 0 {
            return 0.0;
        }
        self.cracked as f64 / self.loaded as f64 * 100.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Cracking Summary ---")?;
        writeln!(f, "Total time taken: {:.2} seconds", self.elapsed.as_secs_f64())?;
        writeln!(f, "Total hashes loaded: {}", self.loaded)?;
        writeln!(f, "Total passwords cracked: {}", self.cracked)?;
        writeln!(f, "Cracking success rate: {:.2}%", self.success_rate())?;
        write!(f, "Hashes remaining: {}", self.remaining)
    }
}
