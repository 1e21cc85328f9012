use serde_json::Value;
use thiserror::Error;

/// Failures of a call to the remote maze service.
///
/// `Server` carries the body the service answered with. Every other variant
/// means no usable response came back.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("maze service answered {status}: {body}")]
    Server { status: u16, body: Value },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode maze service reply: {0}")]
    Decode(String),
    #[error("no maze has been created yet")]
    MissingMazeId,
    #[error("no game id is set")]
    MissingGameId,
}

impl ApiError {
    /// The server-provided error body, if the service answered at all.
    pub fn server_body(&self) -> Option<&Value> {
        match self {
            ApiError::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True when the call never got a response from the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
