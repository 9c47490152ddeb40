use tracing::error;

use crate::{AppError, ClientState};
use checkin_domain::{AttendeePage, AttendeeQuery};

pub async fn list_attendees(
    state: &ClientState,
    query: &AttendeeQuery,
) -> Result<AttendeePage, AppError> {
    state.metrics.record_fetch();
    let page = state
        .attendees
        .fetch_attendees(&state.settings.event_id, query)
        .await
        .map_err(|err| {
            state.metrics.record_fetch_error();
            error!(
                "failed to fetch attendees page {} (search '{}'): {}",
                query.page, query.search, err
            );
            AppError::Api(err)
        })?;
    Ok(page)
}
