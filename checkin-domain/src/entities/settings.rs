use std::time::Duration;

use crate::value_objects::EventId;

/// Values the controllers need, fixed at startup.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub event_id: EventId,
    pub page_size: u32,
    pub scan_cooldown: Duration,
}

impl ClientSettings {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: EventId(event_id.into()),
            page_size: crate::DEFAULT_PAGE_SIZE,
            scan_cooldown: Duration::from_millis(1200),
        }
    }
}
