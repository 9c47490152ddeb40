// Check-in request, server receipt and the client-facing outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::AttendeeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRequest {
    pub attendee_id: AttendeeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinReceipt {
    pub attendee_id: AttendeeId,
    pub checked_in_at: DateTime<Utc>,
}

/// Result of a submitted check-in. A conflict is not an error: the attendee
/// was already present.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckinOutcome {
    CheckedIn { checked_in_at: DateTime<Utc> },
    AlreadyPresent { checked_in_at: Option<DateTime<Utc>> },
    Failed { message: String },
}
