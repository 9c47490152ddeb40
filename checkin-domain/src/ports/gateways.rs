use async_trait::async_trait;

use crate::entities::{AttendeePage, AttendeeQuery, CheckinReceipt, CheckinRequest, Event};
use crate::error::ApiError;
use crate::value_objects::EventId;

#[async_trait]
pub trait EventGateway: Send + Sync {
    async fn fetch_event(&self, event_id: &EventId) -> Result<Event, ApiError>;
}

#[async_trait]
pub trait AttendeeGateway: Send + Sync {
    async fn fetch_attendees(
        &self,
        event_id: &EventId,
        query: &AttendeeQuery,
    ) -> Result<AttendeePage, ApiError>;
    async fn submit_checkin(
        &self,
        event_id: &EventId,
        request: &CheckinRequest,
    ) -> Result<CheckinReceipt, ApiError>;
}
