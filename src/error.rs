/// Message shown for every failure that is not the server's or the user's fault
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client-level errors
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Which side of the boundary an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any request was sent
    Validation,
    /// Network unreachable, unreadable response, or a broken client setup
    Transport,
    /// The backend answered with a non-2xx status
    Server,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::InvalidInput(_) => ErrorKind::Validation,
            ClientError::HttpClient(_)
            | ClientError::MalformedResponse(_)
            | ClientError::InvalidConfig(_) => ErrorKind::Transport,
            ClientError::Server { .. } => ErrorKind::Server,
        }
    }

    /// Text to put in front of the user
    ///
    /// Validation messages and server-reported errors pass through verbatim.
    /// Transport failures all collapse into [`GENERIC_FAILURE_MESSAGE`] so the
    /// user can tell "the server said no" apart from "we never heard back".
    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidInput(msg) => msg.clone(),
            ClientError::Server { message, .. } => format!("Error: {}", message),
            ClientError::HttpClient(_)
            | ClientError::MalformedResponse(_)
            | ClientError::InvalidConfig(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
