use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pwcrack_engine::{Digest, TargetSet};
use tracing::{info, warn};

use crate::error::Error;

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::MissingInput { path: path.to_path_buf(), source })
}

/// Loads `<identifier> <sha1-hex>` records, one per line.
pub fn load_targets(path: &Path) -> Result<TargetSet, Error> {
    info!(path = %path.display(), "loading target digests");
    let targets = parse_targets(open(path)?)?;
    info!(count = targets.len(), "loaded target digests");
    Ok(targets)
}

/// Parses target records. Lines without exactly two fields, or whose digest
/// is not 40 hex characters, are reported and skipped. Blank lines are
/// ignored. An identifier may appear on several lines with different
/// digests; the engine keeps whichever is recovered first.
pub fn parse_targets<R: BufRead>(reader: R) -> Result<TargetSet, Error> {
    let mut targets = TargetSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let [identifier, hex] = fields[..] else {
            warn!(line_num, line = trimmed, "skipping malformed target record");
            continue;
        };

        match Digest::from_hex(hex) {
            Ok(digest) => targets.insert(digest, identifier),
            Err(e) => warn!(line_num, error = %e, "skipping target record with bad digest"),
        }
    }

    Ok(targets)
}

/// Loads the wordlist, one word per line.
pub fn load_dictionary(path: &Path) -> Result<Vec<String>, Error> {
    info!(path = %path.display(), "loading dictionary");
    let words = parse_dictionary(open(path)?)?;
    info!(count = words.len(), "loaded dictionary words");
    Ok(words)
}

/// Trimmed, non-empty lines in file order. Duplicates are kept.
pub fn parse_dictionary<R: BufRead>(reader: R) -> Result<Vec<String>, Error> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use pwcrack_engine::{EngineConfig, Pipeline, StrategyKind, digest};

    use super::*;

    #[test]
    fn test_parse_targets_skips_malformed_records() {
        let input = "\
1 CBFDAC6008F9CAB4083784CBD1874F76618D2A97
2 onlyone fields extra
justone

3 not-a-digest
4\tda39a3ee5e6b4b0d3255bfef95601890afd80709
";
        let targets = parse_targets(Cursor::new(input)).unwrap();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets.contains(&digest("password123")).map(|id| id.as_str()), Some("1"));
        assert_eq!(targets.contains(&digest("")).map(|id| id.as_str()), Some("4"));
    }

    #[test]
    fn test_parse_dictionary_trims_and_drops_blank_lines() {
        let input = "dragon\n  monkey  \n\n\ndragon\r\nshadow";
        let words = parse_dictionary(Cursor::new(input)).unwrap();
        assert_eq!(words, ["dragon", "monkey", "dragon", "shadow"]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("passwords.txt");

        assert!(matches!(load_targets(&missing), Err(Error::MissingInput { .. })));
        assert!(matches!(load_dictionary(&missing), Err(Error::MissingInput { .. })));
    }

    #[test]
    fn test_load_from_files() {
        let mut targets_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(targets_file, "7 {}", digest("sunshine")).unwrap();
        let mut dictionary_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(dictionary_file, "sunshine\nprincess").unwrap();

        let targets = load_targets(targets_file.path()).unwrap();
        let words = load_dictionary(dictionary_file.path()).unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(words, ["sunshine", "princess"]);
    }

    #[test]
    fn test_repeated_identifier_first_match_wins() {
        let mut targets_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(targets_file, "1 {}", digest("42")).unwrap();
        writeln!(targets_file, "1 {}", digest("dragon")).unwrap();
        writeln!(targets_file, "2 {}", digest("monkey")).unwrap();

        let targets = load_targets(targets_file.path()).unwrap();
        assert_eq!(targets.len(), 3);

        let config = EngineConfig {
            max_digit_len: 2,
            workers: 1,
            strategies: vec![StrategyKind::PureDigits, StrategyKind::DictionaryWords],
            ..Default::default()
        };
        let dictionary = vec!["dragon".to_string(), "monkey".to_string()];
        let outcome = Pipeline::new(config).unwrap().run(targets, &dictionary).unwrap();

        assert_eq!(outcome.cracked.get("1"), Some("42"));
        assert_eq!(outcome.cracked.get("2"), Some("monkey"));
        assert!(outcome.remaining.is_empty());
    }
}
