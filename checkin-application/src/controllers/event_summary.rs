use tokio::sync::RwLock;
use tracing::debug;

use crate::queries::event_queries;
use crate::ClientState;
use checkin_domain::Event;

use super::LoadOutcome;

pub const EVENT_ERROR_MESSAGE: &str = "Failed to load the event.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSummaryState {
    pub event: Option<Event>,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub last_error: Option<String>,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Load,
    Focus,
    Refresh,
}

pub struct EventSummaryController {
    state: ClientState,
    summary: RwLock<EventSummaryState>,
}

impl EventSummaryController {
    pub fn new(state: ClientState) -> Self {
        Self {
            state,
            summary: RwLock::new(EventSummaryState::default()),
        }
    }

    pub async fn snapshot(&self) -> EventSummaryState {
        self.summary.read().await.clone()
    }

    /// Mount. Shows the loading indicator until a first record arrives.
    pub async fn load(&self) -> LoadOutcome {
        self.fetch(FetchKind::Load).await
    }

    /// Re-entry into view; refreshes the counters quietly.
    pub async fn on_focus(&self) -> LoadOutcome {
        self.fetch(FetchKind::Focus).await
    }

    pub async fn refresh(&self) -> LoadOutcome {
        self.fetch(FetchKind::Refresh).await
    }

    pub async fn retry(&self) -> LoadOutcome {
        self.fetch(FetchKind::Load).await
    }

    async fn fetch(&self, kind: FetchKind) -> LoadOutcome {
        let generation = {
            let mut summary = self.summary.write().await;
            summary.generation += 1;
            summary.last_error = None;
            summary.is_loading = kind == FetchKind::Load && summary.event.is_none();
            summary.is_refreshing = kind == FetchKind::Refresh;
            summary.generation
        };

        let result = event_queries::fetch_event(&self.state).await;

        let mut summary = self.summary.write().await;
        if summary.generation != generation {
            debug!("discarding event response from generation {}", generation);
            return LoadOutcome::Stale;
        }
        summary.is_loading = false;
        summary.is_refreshing = false;
        match result {
            Ok(event) => {
                summary.event = Some(event);
                LoadOutcome::Loaded { received: 1 }
            }
            Err(_) => {
                summary.last_error = Some(EVENT_ERROR_MESSAGE.to_string());
                LoadOutcome::Failed
            }
        }
    }
}
