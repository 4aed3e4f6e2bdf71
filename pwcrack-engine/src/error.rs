use compact_str::CompactString;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid digest '{input}': {reason}")]
    InvalidDigest { input: String, reason: &'static str },

    /// Two different plaintexts matched the same target digest. Short of a
    /// SHA-1 collision this can only be a programming error.
    #[error(
        "identifier {identifier} matched one digest with two plaintexts ('{existing}' vs '{incoming}')"
    )]
    ConflictingPlaintext { identifier: CompactString, existing: String, incoming: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
