use tracing::error;

use crate::{AppError, ClientState};
use checkin_domain::Event;

pub async fn fetch_event(state: &ClientState) -> Result<Event, AppError> {
    state.metrics.record_fetch();
    let event = state
        .events
        .fetch_event(&state.settings.event_id)
        .await
        .map_err(|err| {
            state.metrics.record_fetch_error();
            error!("failed to fetch event {}: {}", state.settings.event_id, err);
            AppError::Api(err)
        })?;
    Ok(event)
}
