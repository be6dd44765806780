use thiserror::Error;

/// Why a job action did not produce a confirmed state change.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("login required")]
    NotAuthenticated,

    #[error("{0}")]
    Validation(String),

    /// The backend answered but reported `success: false`.
    #[error("rejected by server: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ActionError {
    /// Transport failures, bad statuses and undecodable bodies all surface
    /// to the user the same way.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ActionError::Transport(_) | ActionError::Status(_) | ActionError::Malformed(_)
        )
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ActionError::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);
