// Decodes the text carried by a badge QR code

use serde::Deserialize;

use crate::entities::ScanPayload;
use crate::error::ScanPayloadError;
use crate::value_objects::{AttendeeId, EventId};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    #[serde(default)]
    event_id: Option<String>,
    #[serde(default)]
    attendee_id: Option<String>,
}

pub fn decode_scan_payload(raw: &str) -> Result<ScanPayload, ScanPayloadError> {
    let parsed: RawPayload = serde_json::from_str(raw.trim())
        .map_err(|err| ScanPayloadError::Malformed(err.to_string()))?;
    let event_id = required(parsed.event_id, "eventId")?;
    let attendee_id = required(parsed.attendee_id, "attendeeId")?;
    Ok(ScanPayload {
        event_id: EventId(event_id),
        attendee_id: AttendeeId(attendee_id),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ScanPayloadError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(raw.trim().to_string()),
        _ => Err(ScanPayloadError::MissingField(field)),
    }
}
