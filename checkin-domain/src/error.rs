use thiserror::Error;

/// Failure talking to the remote check-in API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),
    /// HTTP 409: the mutation was already satisfied by an earlier request.
    #[error("conflict: {body}")]
    Conflict { body: String },
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
    #[error("unexpected response payload: {0}")]
    Decode(String),
}

impl ApiError {
    pub const CONFLICT_STATUS: u16 = 409;

    pub fn from_status(status: u16, body: String) -> Self {
        if status == Self::CONFLICT_STATUS {
            ApiError::Conflict { body }
        } else {
            ApiError::Status { status, body }
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Conflict { .. } => Some(Self::CONFLICT_STATUS),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanPayloadError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),
    #[error("payload is missing {0}")]
    MissingField(&'static str),
}
