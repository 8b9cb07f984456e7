use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Debug, Error)]
pub enum FolioError {
    /// A required field of an entity draft was empty. Refused before any
    /// persistence or network activity.
    #[error("required field missing: {0}")]
    Validation(String),

    /// Storage-level failure, tagged with the diagnostic label of the port.
    #[error("[{0}]: {1}")]
    Storage(String, String),

    #[error("could not parse stored data")]
    Parse,

    /// A named remote operation failed. Terminal for the in-flight action;
    /// nothing is retried.
    #[error("remote operation `{0}` failed: {1}")]
    Network(String, String),

    #[error("http error: {0}")]
    Http(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(_: serde_json::Error) -> Self {
        FolioError::Parse
    }
}

impl From<url::ParseError> for FolioError {
    fn from(err: url::ParseError) -> Self {
        FolioError::Other(err.to_string())
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        FolioError::Http(err.to_string())
    }
}

impl From<&str> for FolioError {
    fn from(msg: &str) -> Self {
        FolioError::Other(msg.to_owned())
    }
}

impl From<String> for FolioError {
    fn from(msg: String) -> Self {
        FolioError::Other(msg)
    }
}
