/// A vocabulary source could not be retrieved.
///
/// Parsing itself never fails; malformed rows are dropped by the parser.
/// When a load attempt errors, no partial dataset is exposed to the caller.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("source returned HTTP status {status}")]
    Status { status: u16 },
}
