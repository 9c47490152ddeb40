use tracing::{error, info};

use crate::{AppError, ClientState};
use checkin_domain::{AttendeeId, CheckinOutcome, CheckinRequest};

pub const CHECKIN_FAILED_MESSAGE: &str = "Could not complete the check-in.";

/// Posts a check-in and folds the response into an outcome. A conflict means
/// the attendee was already present and is reported as such.
pub async fn submit_checkin(state: &ClientState, attendee_id: &AttendeeId) -> CheckinOutcome {
    let request = CheckinRequest {
        attendee_id: attendee_id.clone(),
    };
    match state
        .attendees
        .submit_checkin(&state.settings.event_id, &request)
        .await
        .map_err(AppError::from)
    {
        Ok(receipt) => {
            state.metrics.record_checkin();
            info!("attendee {} checked in", attendee_id);
            CheckinOutcome::CheckedIn {
                checked_in_at: receipt.checked_in_at,
            }
        }
        Err(err) if err.is_conflict() => {
            state.metrics.record_conflict();
            info!("attendee {} was already checked in", attendee_id);
            CheckinOutcome::AlreadyPresent {
                checked_in_at: None,
            }
        }
        Err(err) => {
            state.metrics.record_checkin_error();
            error!("check-in for attendee {} failed: {}", attendee_id, err);
            CheckinOutcome::Failed {
                message: err.user_message().to_string(),
            }
        }
    }
}
