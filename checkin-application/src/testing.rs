// In-memory stand-in for the remote API, shared by the controller tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Semaphore;

use checkin_domain::{
    ApiError, Attendee, AttendeeGateway, AttendeeId, AttendeePage, AttendeeQuery, CheckinReceipt,
    CheckinRequest, ClientSettings, Event, EventGateway, EventId, EventStats,
};

use crate::{ClientState, Metrics};

pub fn attendee(id: &str, name: &str) -> Attendee {
    Attendee {
        id: AttendeeId::from(id),
        name: name.to_string(),
        email: None,
        document: None,
        checked_in_at: None,
    }
}

pub fn sample_event(total: u64, checked_in: u64) -> Event {
    Event {
        id: EventId::from("E1"),
        title: "Rust Meetup".to_string(),
        starts_at: "2026-10-16T19:00:00Z".parse().expect("start"),
        ends_at: "2026-10-16T22:00:00Z".parse().expect("end"),
        location: "Auditorium".to_string(),
        stats: EventStats {
            total,
            checked_in,
            absent: total - checked_in,
        },
    }
}

pub fn client_state(api: &Arc<FakeApi>) -> ClientState {
    ClientState {
        settings: ClientSettings::new("E1"),
        events: api.clone(),
        attendees: api.clone(),
        metrics: Arc::new(Metrics::default()),
    }
}

#[derive(Default)]
pub struct FakeApi {
    roster: Mutex<Vec<Attendee>>,
    reported_total: Mutex<Option<u64>>,
    search_delays: Mutex<HashMap<String, Duration>>,
    fetch_failures: Mutex<Vec<ApiError>>,
    queries: Mutex<Vec<AttendeeQuery>>,
    fetch_calls: AtomicUsize,
    event: Mutex<Option<Event>>,
    event_failures: Mutex<Vec<ApiError>>,
    event_calls: AtomicUsize,
    checkin_error: Mutex<Option<ApiError>>,
    checkin_gate: Mutex<Option<Arc<Semaphore>>>,
    checkin_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_roster(size: usize) -> Arc<Self> {
        let api = Self::default();
        {
            let mut roster = api.roster.lock().expect("roster");
            for n in 1..=size {
                roster.push(attendee(&format!("A{n}"), &format!("Attendee {n}")));
            }
        }
        Arc::new(api)
    }

    pub fn push_attendee(&self, attendee: Attendee) {
        self.roster.lock().expect("roster").push(attendee);
    }

    pub fn mark_present(&self, id: &str, at: DateTime<Utc>) {
        let mut roster = self.roster.lock().expect("roster");
        if let Some(item) = roster.iter_mut().find(|item| item.id.as_str() == id) {
            item.checked_in_at = Some(at);
        }
    }

    pub fn misreport_total(&self, total: u64) {
        *self.reported_total.lock().expect("total") = Some(total);
    }

    pub fn delay_search(&self, term: &str, delay: Duration) {
        self.search_delays
            .lock()
            .expect("delays")
            .insert(term.to_string(), delay);
    }

    pub fn fail_next_fetch(&self, err: ApiError) {
        self.fetch_failures.lock().expect("failures").push(err);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<AttendeeQuery> {
        self.queries.lock().expect("queries").last().cloned()
    }

    pub fn set_event(&self, event: Event) {
        *self.event.lock().expect("event") = Some(event);
    }

    pub fn fail_next_event(&self, err: ApiError) {
        self.event_failures.lock().expect("failures").push(err);
    }

    pub fn event_calls(&self) -> usize {
        self.event_calls.load(Ordering::SeqCst)
    }

    pub fn fail_checkins(&self, err: ApiError) {
        *self.checkin_error.lock().expect("checkin error") = Some(err);
    }

    /// Check-ins block until `release_checkins` is called.
    pub fn hold_checkins(&self) {
        *self.checkin_gate.lock().expect("gate") = Some(Arc::new(Semaphore::new(0)));
    }

    pub fn release_checkins(&self) {
        if let Some(gate) = self.checkin_gate.lock().expect("gate").as_ref() {
            gate.add_permits(1024);
        }
    }

    pub fn checkin_calls(&self) -> usize {
        self.checkin_calls.load(Ordering::SeqCst)
    }

    pub fn server_time(&self) -> DateTime<Utc> {
        "2026-10-16T20:00:00Z".parse().expect("server time")
    }
}

fn matches_term(attendee: &Attendee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [
        Some(attendee.name.as_str()),
        attendee.email.as_deref(),
        attendee.document.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

#[async_trait]
impl EventGateway for FakeApi {
    async fn fetch_event(&self, _event_id: &EventId) -> Result<Event, ApiError> {
        self.event_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.event_failures.lock().expect("failures").pop() {
            return Err(err);
        }
        self.event
            .lock()
            .expect("event")
            .clone()
            .ok_or_else(|| ApiError::from_status(404, "no event".to_string()))
    }
}

#[async_trait]
impl AttendeeGateway for FakeApi {
    async fn fetch_attendees(
        &self,
        _event_id: &EventId,
        query: &AttendeeQuery,
    ) -> Result<AttendeePage, ApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().expect("queries").push(query.clone());
        let delay = self
            .search_delays
            .lock()
            .expect("delays")
            .get(&query.search)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.fetch_failures.lock().expect("failures").pop() {
            return Err(err);
        }

        let matching: Vec<Attendee> = self
            .roster
            .lock()
            .expect("roster")
            .iter()
            .filter(|item| matches_term(item, &query.search))
            .cloned()
            .collect();
        let start = ((query.page.max(1) - 1) * query.limit) as usize;
        let data = matching
            .iter()
            .skip(start)
            .take(query.limit as usize)
            .cloned()
            .collect();
        let total = self
            .reported_total
            .lock()
            .expect("total")
            .unwrap_or(matching.len() as u64);
        Ok(AttendeePage {
            data,
            page: query.page,
            limit: query.limit,
            total,
        })
    }

    async fn submit_checkin(
        &self,
        _event_id: &EventId,
        request: &CheckinRequest,
    ) -> Result<CheckinReceipt, ApiError> {
        self.checkin_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.checkin_gate.lock().expect("gate").clone();
        if let Some(gate) = gate {
            let _permit = gate.acquire().await.expect("gate open");
        }
        if let Some(err) = self.checkin_error.lock().expect("checkin error").clone() {
            return Err(err);
        }
        Ok(CheckinReceipt {
            attendee_id: request.attendee_id.clone(),
            checked_in_at: self.server_time(),
        })
    }
}
