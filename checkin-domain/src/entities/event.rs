// Event entity
// Read-only event record with its attendance snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::EventId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total: u64,
    pub checked_in: u64,
    pub absent: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: String,
    pub stats: EventStats,
}
