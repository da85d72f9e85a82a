use thiserror::Error;

/// Application-level error type.
/// Every failure in a run is one of these three kinds and is reported once by
/// the pipeline's top-level handler.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing YAML structure, or a missing/empty required secret.
    #[error("{0}")]
    Config(String),

    /// A required file or the data folder itself is absent.
    #[error("{0}")]
    NotFound(String),

    #[error("{0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    /// The console text printed for this error at the end of a failed run.
    pub fn report(&self) -> String {
        match self {
            AppError::Config(msg) => format!("Configuration error: {msg}"),
            AppError::NotFound(msg) => format!(
                "File not found: {msg}\nEnsure all required files are present in the data folder."
            ),
            AppError::Unexpected(e) => format!("An unexpected error occurred: {e:#}"),
        }
    }

    /// Short machine-friendly label, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }
}
