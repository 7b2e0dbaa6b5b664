/// Failures surfaced by the read entry points.
///
/// Runtime conditions (missing file, permission denied, malformed line) are
/// the `Err` variant of the returned `Result`; callers branch on the variant
/// rather than catching anything. Contract violations (an encoding name the
/// library does not know) are produced before any I/O starts.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: simd_json::Error,
    },
    #[error("unsupported encoding: {0:?}")]
    UnsupportedEncoding(String),
}
