// QR badge payload

use serde::{Deserialize, Serialize};

use crate::value_objects::{AttendeeId, EventId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPayload {
    pub event_id: EventId,
    pub attendee_id: AttendeeId,
}
