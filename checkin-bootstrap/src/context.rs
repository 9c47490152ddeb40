use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use checkin_application::{
    AttendeeListController, ClientState, EventSummaryController, Metrics, ScanController,
};
use checkin_infrastructure::{AppConfig, HttpClient, RestAttendeeApi, RestEventApi};

pub struct AppContext {
    pub state: ClientState,
    pub event: EventSummaryController,
    pub attendees: AttendeeListController,
    pub scanner: ScanController,
}

impl AppContext {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = Arc::new(HttpClient::new(
            &config.base_url,
            config.api_token.clone(),
        )?);
        info!(
            "checking in event {} against {}",
            config.event_id, config.base_url
        );

        let state = ClientState {
            settings: config.to_client_settings(),
            events: Arc::new(RestEventApi::new(http.clone())),
            attendees: Arc::new(RestAttendeeApi::new(http)),
            metrics: Arc::new(Metrics::default()),
        };
        Ok(Self::from_state(state))
    }

    pub fn from_state(state: ClientState) -> Self {
        Self {
            event: EventSummaryController::new(state.clone()),
            attendees: AttendeeListController::new(state.clone()),
            scanner: ScanController::new(state.clone()),
            state,
        }
    }
}
