use std::sync::Arc;

use async_trait::async_trait;

use checkin_domain::{
    ApiError, AttendeeGateway, AttendeePage, AttendeeQuery, CheckinReceipt, CheckinRequest,
    EventId,
};

use crate::services::HttpClient;

pub struct RestAttendeeApi {
    http: Arc<HttpClient>,
}

impl RestAttendeeApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AttendeeGateway for RestAttendeeApi {
    async fn fetch_attendees(
        &self,
        event_id: &EventId,
        query: &AttendeeQuery,
    ) -> Result<AttendeePage, ApiError> {
        self.http
            .get_json(
                &["events", event_id.as_str(), "attendees"],
                &query.to_params(),
            )
            .await
    }

    async fn submit_checkin(
        &self,
        event_id: &EventId,
        request: &CheckinRequest,
    ) -> Result<CheckinReceipt, ApiError> {
        self.http
            .post_json(&["events", event_id.as_str(), "checkin"], request)
            .await
    }
}
