use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::commands::checkin_commands;
use crate::{AppError, ClientState};
use checkin_domain::{decode_scan_payload, AttendeeId, CheckinOutcome, EventId, ScanPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Decoding,
    Validating,
    Submitting,
    CoolingDown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    CheckedIn { attendee_id: AttendeeId },
    AlreadyPresent { attendee_id: AttendeeId },
    InvalidPayload { reason: String },
    WrongEvent { event_id: EventId },
    Failed { attendee_id: AttendeeId, message: String },
}

impl ScanOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            ScanOutcome::CheckedIn { .. } => "Check-in OK",
            ScanOutcome::AlreadyPresent { .. } => "Already present",
            ScanOutcome::InvalidPayload { .. } => "Invalid QR code",
            ScanOutcome::WrongEvent { .. } => "QR from another event",
            ScanOutcome::Failed { .. } => "Check-in failed",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ScanOutcome::CheckedIn { .. } => "Attendance recorded successfully.".to_string(),
            ScanOutcome::AlreadyPresent { .. } => "This attendee was already present.".to_string(),
            ScanOutcome::InvalidPayload { .. } => {
                "This QR code is not a valid check-in badge.".to_string()
            }
            ScanOutcome::WrongEvent { .. } => "The code belongs to another event.".to_string(),
            ScanOutcome::Failed { message, .. } => message.clone(),
        }
    }
}

/// Badge scanner. One scan at a time; after each attempt the scanner stays
/// closed for the configured cool-down before accepting the next one.
pub struct ScanController {
    state: ClientState,
    phase: Arc<Mutex<ScanPhase>>,
}

impl ScanController {
    pub fn new(state: ClientState) -> Self {
        Self {
            state,
            phase: Arc::new(Mutex::new(ScanPhase::Idle)),
        }
    }

    pub async fn phase(&self) -> ScanPhase {
        *self.phase.lock().await
    }

    /// Returns `None` when the scan was dropped because the scanner is busy.
    pub async fn handle_scan(&self, raw: &str) -> Option<ScanOutcome> {
        {
            let mut phase = self.phase.lock().await;
            if *phase != ScanPhase::Idle {
                debug!("scan ignored while {:?}", *phase);
                return None;
            }
            *phase = ScanPhase::Decoding;
        }

        let mut reopen = ReopenOnDrop {
            phase: Arc::clone(&self.phase),
            cooldown: self.state.settings.scan_cooldown,
            armed: true,
        };
        let outcome = self.process(raw).await;
        reopen.armed = false;
        self.start_cooldown().await;
        Some(outcome)
    }

    async fn process(&self, raw: &str) -> ScanOutcome {
        let payload = match self.decode(raw) {
            Ok(payload) => payload,
            Err(err) => {
                self.state.metrics.record_rejected_scan();
                warn!("rejected scan: {}", err);
                return ScanOutcome::InvalidPayload {
                    reason: err.to_string(),
                };
            }
        };

        self.set_phase(ScanPhase::Validating).await;
        if payload.event_id != self.state.settings.event_id {
            self.state.metrics.record_rejected_scan();
            warn!(
                "rejected scan for event {} while checking in {}",
                payload.event_id, self.state.settings.event_id
            );
            return ScanOutcome::WrongEvent {
                event_id: payload.event_id,
            };
        }

        self.set_phase(ScanPhase::Submitting).await;
        let attendee_id = payload.attendee_id;
        match checkin_commands::submit_checkin(&self.state, &attendee_id).await {
            CheckinOutcome::CheckedIn { .. } => ScanOutcome::CheckedIn { attendee_id },
            CheckinOutcome::AlreadyPresent { .. } => ScanOutcome::AlreadyPresent { attendee_id },
            CheckinOutcome::Failed { message } => ScanOutcome::Failed {
                attendee_id,
                message,
            },
        }
    }

    fn decode(&self, raw: &str) -> Result<ScanPayload, AppError> {
        Ok(decode_scan_payload(raw)?)
    }

    async fn set_phase(&self, next: ScanPhase) {
        *self.phase.lock().await = next;
    }

    async fn start_cooldown(&self) {
        self.set_phase(ScanPhase::CoolingDown).await;
        let phase = Arc::clone(&self.phase);
        let cooldown = self.state.settings.scan_cooldown;
        tokio::spawn(async move {
            tokio::time::sleep(cooldown).await;
            *phase.lock().await = ScanPhase::Idle;
        });
    }
}

/// Puts an abandoned scan through the cool-down so the gate cannot stay
/// closed when the caller drops `handle_scan` mid-flight.
struct ReopenOnDrop {
    phase: Arc<Mutex<ScanPhase>>,
    cooldown: Duration,
    armed: bool,
}

impl Drop for ReopenOnDrop {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("scan abandoned outside a runtime, scanner stays closed");
            return;
        };
        debug!("scan abandoned, cooling down");
        let phase = Arc::clone(&self.phase);
        let cooldown = self.cooldown;
        runtime.spawn(async move {
            *phase.lock().await = ScanPhase::CoolingDown;
            tokio::time::sleep(cooldown).await;
            *phase.lock().await = ScanPhase::Idle;
        });
    }
}
