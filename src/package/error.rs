use thiserror::Error;

/// Failure kinds reported by the install/remove backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("the \"{0}\" package is already installed, pass overwrite=true to replace it")]
    AlreadyInstalled(String),

    #[error("failed to fetch the package manifest: {0}")]
    FetchFailed(String),

    #[error("package verification failed: {0}")]
    VerificationFailed(String),

    #[error("\"{0}\" is not a valid erc1319 package URI")]
    InvalidUri(String),

    #[error("the \"{0}\" package is not installed in this project")]
    NotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
