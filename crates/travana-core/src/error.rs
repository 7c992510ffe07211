//! Error types for remote calls

use thiserror::Error;

/// Fallback text when an error carries no usable message
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's JSON `message` field.
    #[error("Request failed with status code {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Unauthorized")]
    Unauthorized { message: Option<String> },

    /// Transport failure (no response)
    #[error("{0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Structured server-provided message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } | ApiError::Unauthorized { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Message shown to the user: server message, then the error's own
    /// message, then [`DEFAULT_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let own = self.to_string();
        if own.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            own
        }
    }
}
