use checkin_domain::{ApiError, ScanPayloadError};
use thiserror::Error;

use crate::commands::checkin_commands::CHECKIN_FAILED_MESSAGE;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid scan: {0}")]
    InvalidScan(#[from] ScanPayloadError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Api(err) if err.is_conflict())
    }

    /// Text shown to the operator; details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidScan(_) => "This QR code is not a valid check-in badge.",
            AppError::Api(err) if err.is_conflict() => "This attendee was already present.",
            AppError::Api(_) => CHECKIN_FAILED_MESSAGE,
        }
    }
}
