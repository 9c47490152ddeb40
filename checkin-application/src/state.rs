use std::sync::Arc;

use checkin_domain::ports::{AttendeeGateway, EventGateway};
use checkin_domain::ClientSettings;

use crate::Metrics;

#[derive(Clone)]
pub struct ClientState {
    pub settings: ClientSettings,
    pub events: Arc<dyn EventGateway>,
    pub attendees: Arc<dyn AttendeeGateway>,
    pub metrics: Arc<Metrics>,
}
