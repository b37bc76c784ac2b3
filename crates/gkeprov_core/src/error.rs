use thiserror::Error;

/// Guidance appended to every "no usable project" failure.
pub const CREATE_PROJECT_GUIDANCE: &str =
    "please manually create one and rerun this wizard";

#[derive(Debug, Error)]
pub enum Error {
    #[error("login failed: {0}")]
    Login(String),

    #[error("{0}")]
    Validation(String),

    #[error("prompt aborted")]
    PromptAborted,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("{0}")]
    ProjectResolution(String),

    #[error("cloud provider error: {0}")]
    Provider(String),

    #[error("failed to detect home directory")]
    HomeDirectoryNotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
