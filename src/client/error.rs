use reqwest::StatusCode;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Shown when the backend fails without saying why.
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch jobs";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The form was rejected before any request went out.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    /// The request never got an answer.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with something that is not JSON.
    #[error("Invalid JSON response: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::client::storage::StorageError),
}

impl ClientError {
    /// Banner text for the error panel.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            other => format!("Error: {}. Please try again.", other),
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, ClientError::Parse(_))
    }
}
