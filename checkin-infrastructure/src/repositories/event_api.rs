use std::sync::Arc;

use async_trait::async_trait;

use checkin_domain::{ApiError, Event, EventGateway, EventId};

use crate::services::HttpClient;

pub struct RestEventApi {
    http: Arc<HttpClient>,
}

impl RestEventApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EventGateway for RestEventApi {
    async fn fetch_event(&self, event_id: &EventId) -> Result<Event, ApiError> {
        self.http.get_json(&["events", event_id.as_str()], &[]).await
    }
}
