//! Error type for the command-line front end.

use sf_project::ProjectError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Self-check failed: {failed} of {total} scenarios did not pass")]
    SelfCheckFailed { failed: usize, total: usize },
}
