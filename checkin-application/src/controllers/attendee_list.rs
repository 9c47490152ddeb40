//! Paginated, searchable attendee roster with optimistic check-in.
//!
//! Every reload bumps a generation counter. Responses carry the generation
//! they were issued under and are dropped if a newer reload has started, so a
//! slow page for an old search term can never replace the current one.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::commands::checkin_commands;
use crate::queries::attendee_queries;
use crate::ClientState;
use checkin_domain::{Attendee, AttendeeId, AttendeeQuery, CheckinOutcome};

use super::LoadOutcome;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load attendees.";
pub const NOT_LOADED_MESSAGE: &str = "Attendee is not in the loaded list.";

#[derive(Debug, Clone, PartialEq)]
pub struct AttendeeListState {
    pub items: Vec<Attendee>,
    pub search_term: String,
    pub page: u32,
    pub total: u64,
    pub is_loading_first_page: bool,
    pub is_refreshing: bool,
    pub is_loading_more: bool,
    pub last_error: Option<String>,
    generation: u64,
}

impl Default for AttendeeListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_term: String::new(),
            page: 1,
            total: 0,
            is_loading_first_page: false,
            is_refreshing: false,
            is_loading_more: false,
            last_error: None,
            generation: 0,
        }
    }
}

impl AttendeeListState {
    pub fn is_busy(&self) -> bool {
        self.is_loading_first_page || self.is_refreshing || self.is_loading_more
    }

    pub fn has_more(&self) -> bool {
        (self.items.len() as u64) < self.total
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more() && !self.is_busy()
    }

    pub fn find(&self, attendee_id: &AttendeeId) -> Option<&Attendee> {
        self.items.iter().find(|item| item.id == *attendee_id)
    }

    fn enforce_total(&mut self) {
        if self.items.len() as u64 > self.total {
            warn!(
                "server returned {} attendees for a total of {}, truncating",
                self.items.len(),
                self.total
            );
            self.items
                .truncate(usize::try_from(self.total).unwrap_or(usize::MAX));
        }
    }
}

/// What the screen should do after the user taps an attendee.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckinPrompt {
    NotFound,
    AlreadyPresent {
        name: String,
        checked_in_at: DateTime<Utc>,
    },
    NeedsConfirmation {
        attendee: Attendee,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReloadKind {
    FirstPage,
    Refresh,
}

pub struct AttendeeListController {
    state: ClientState,
    list: RwLock<AttendeeListState>,
}

impl AttendeeListController {
    pub fn new(state: ClientState) -> Self {
        Self {
            state,
            list: RwLock::new(AttendeeListState::default()),
        }
    }

    pub async fn snapshot(&self) -> AttendeeListState {
        self.list.read().await.clone()
    }

    /// Initial load on mount.
    pub async fn load(&self) -> LoadOutcome {
        self.reload(ReloadKind::FirstPage, None).await
    }

    /// Entry into the screen. The list starts over from an unfiltered page 1;
    /// nothing from a previous visit survives.
    pub async fn mount(&self) -> LoadOutcome {
        self.reload(ReloadKind::FirstPage, Some(String::new())).await
    }

    pub async fn set_search_term(&self, term: impl Into<String>) -> LoadOutcome {
        self.reload(ReloadKind::FirstPage, Some(term.into())).await
    }

    pub async fn refresh(&self) -> LoadOutcome {
        self.reload(ReloadKind::Refresh, None).await
    }

    pub async fn load_more(&self) -> LoadOutcome {
        let (generation, query) = {
            let mut list = self.list.write().await;
            if !list.can_load_more() {
                return LoadOutcome::Skipped;
            }
            list.is_loading_more = true;
            list.last_error = None;
            let query = AttendeeQuery {
                search: list.search_term.clone(),
                page: list.page + 1,
                limit: self.state.settings.page_size,
            };
            (list.generation, query)
        };

        let result = attendee_queries::list_attendees(&self.state, &query).await;

        let mut list = self.list.write().await;
        if list.generation != generation {
            debug!("discarding attendees page {} from generation {}", query.page, generation);
            return LoadOutcome::Stale;
        }
        list.is_loading_more = false;
        match result {
            Ok(page) => {
                let received = page.data.len();
                list.page = query.page;
                list.total = page.total;
                list.items.extend(page.data);
                list.enforce_total();
                LoadOutcome::Loaded { received }
            }
            Err(_) => {
                list.last_error = Some(LOAD_ERROR_MESSAGE.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// First half of a check-in tap. Never touches the network.
    pub async fn request_checkin(&self, attendee_id: &AttendeeId) -> CheckinPrompt {
        let list = self.list.read().await;
        match list.find(attendee_id) {
            None => CheckinPrompt::NotFound,
            Some(attendee) => match attendee.checked_in_at {
                Some(checked_in_at) => CheckinPrompt::AlreadyPresent {
                    name: attendee.name.clone(),
                    checked_in_at,
                },
                None => CheckinPrompt::NeedsConfirmation {
                    attendee: attendee.clone(),
                },
            },
        }
    }

    /// Second half, after the user confirmed. Marks the attendee present
    /// locally, then asks the server. Only a plain failure reverts the mark.
    pub async fn confirm_checkin(&self, attendee_id: &AttendeeId) -> CheckinOutcome {
        let optimistic = Utc::now();
        {
            let mut list = self.list.write().await;
            let Some(attendee) = list.items.iter_mut().find(|item| item.id == *attendee_id) else {
                return CheckinOutcome::Failed {
                    message: NOT_LOADED_MESSAGE.to_string(),
                };
            };
            if let Some(checked_in_at) = attendee.checked_in_at {
                return CheckinOutcome::AlreadyPresent {
                    checked_in_at: Some(checked_in_at),
                };
            }
            attendee.checked_in_at = Some(optimistic);
        }

        let outcome = checkin_commands::submit_checkin(&self.state, attendee_id).await;

        let mut list = self.list.write().await;
        // A reload may have replaced the row meanwhile; only touch our own mark.
        let pending = list
            .items
            .iter_mut()
            .find(|item| item.id == *attendee_id && item.checked_in_at == Some(optimistic));
        match (&outcome, pending) {
            (CheckinOutcome::CheckedIn { checked_in_at }, Some(attendee)) => {
                attendee.checked_in_at = Some(*checked_in_at);
            }
            (CheckinOutcome::Failed { .. }, Some(attendee)) => {
                attendee.checked_in_at = None;
            }
            _ => {}
        }
        outcome
    }

    async fn reload(&self, kind: ReloadKind, term: Option<String>) -> LoadOutcome {
        let (generation, query) = {
            let mut list = self.list.write().await;
            if let Some(term) = term {
                list.search_term = term;
            }
            list.generation += 1;
            list.page = 1;
            list.total = 0;
            list.items.clear();
            list.is_loading_first_page = kind == ReloadKind::FirstPage;
            list.is_refreshing = kind == ReloadKind::Refresh;
            list.is_loading_more = false;
            list.last_error = None;
            let query =
                AttendeeQuery::first_page(list.search_term.clone(), self.state.settings.page_size);
            (list.generation, query)
        };

        let result = attendee_queries::list_attendees(&self.state, &query).await;

        let mut list = self.list.write().await;
        if list.generation != generation {
            debug!(
                "discarding attendees for '{}' from generation {}",
                query.search, generation
            );
            return LoadOutcome::Stale;
        }
        list.is_loading_first_page = false;
        list.is_refreshing = false;
        match result {
            Ok(page) => {
                let received = page.data.len();
                list.total = page.total;
                list.items = page.data;
                list.enforce_total();
                LoadOutcome::Loaded { received }
            }
            Err(_) => {
                list.last_error = Some(LOAD_ERROR_MESSAGE.to_string());
                LoadOutcome::Failed
            }
        }
    }
}
