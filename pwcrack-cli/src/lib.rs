//! File handling around [`pwcrack_engine`]: reading the target and dictionary
//! files, and writing recovered passwords plus the run summary.

pub mod error;
pub mod loader;
pub mod output;

pub use error::Error;
pub use loader::{load_dictionary, load_targets, parse_dictionary, parse_targets};
pub use output::{Summary, write_results};
