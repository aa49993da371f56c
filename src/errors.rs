use thiserror::Error;

/// Crate-wide error type.
///
/// Empty sampling pools are deliberately absent here: a category with no
/// products falls back to the full catalog inside the generators and is never
/// surfaced as an error.
#[derive(Debug, Error)]
pub enum DataGenError {
    /// Invalid generation parameters (zero counts, out-of-range limits).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The identity provider could not satisfy a request, e.g. it exhausted
    /// its attempts at producing a unique email. Aborts the run.
    #[error("identity provider failure: {0}")]
    Provider(String),

    #[error("CSV export error: {0}")]
    Export(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataGenResult<T> = Result<T, DataGenError>;

impl From<config::ConfigError> for DataGenError {
    fn from(err: config::ConfigError) -> Self {
        DataGenError::Configuration(err.to_string())
    }
}

impl From<validator::ValidationErrors> for DataGenError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DataGenError::Configuration(errors.to_string())
    }
}
