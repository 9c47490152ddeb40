//! Text presentation of the three screens.
//!
//! Lines typed by the operator become intents; controller snapshots become
//! plain text. The camera is replaced by `scan <payload>`.

use checkin_application::{AttendeeListState, EventSummaryState, ScanOutcome};
use checkin_domain::{format_clock, format_date_time, Attendee, AttendeeId, CheckinOutcome};

pub const HELP: &str = "\
commands:
  event               show the event summary
  refresh-event       reload the event summary
  list                open the attendee list
  search <term>       filter attendees by name, email or document
  clear               clear the search
  more                load the next page
  refresh             reload the attendee list
  checkin <id>        check an attendee in
  scan <payload>      submit a scanned badge
  stats               show session counters
  help                show this help
  quit                leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowEvent,
    RefreshEvent,
    ShowAttendees,
    Search(String),
    ClearSearch,
    LoadMore,
    RefreshAttendees,
    Checkin(AttendeeId),
    Scan(String),
    Stats,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_intent(line: &str) -> Option<Intent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let intent = match (command.to_lowercase().as_str(), rest) {
        ("event", _) => Intent::ShowEvent,
        ("refresh-event", _) => Intent::RefreshEvent,
        ("list", _) => Intent::ShowAttendees,
        ("search", term) => Intent::Search(term.to_string()),
        ("clear", _) => Intent::ClearSearch,
        ("more", _) => Intent::LoadMore,
        ("refresh", _) => Intent::RefreshAttendees,
        ("checkin", id) if !id.is_empty() => Intent::Checkin(AttendeeId::from(id)),
        ("scan", payload) if !payload.is_empty() => Intent::Scan(payload.to_string()),
        ("stats", _) => Intent::Stats,
        ("help", _) | ("?", _) => Intent::Help,
        ("quit", _) | ("exit", _) => Intent::Quit,
        _ => Intent::Unknown(line.to_string()),
    };
    Some(intent)
}

pub fn is_confirmation(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn render_event(state: &EventSummaryState) -> String {
    let mut out = String::new();
    if let Some(error) = &state.last_error {
        out.push_str(&format!("! {error} (type 'refresh-event' to try again)\n"));
    }
    match &state.event {
        Some(event) => {
            out.push_str(&format!("{}\n", event.title));
            out.push_str(&format!("  at {}\n", event.location));
            out.push_str(&format!(
                "  {} -> {}\n",
                format_date_time(&event.starts_at),
                format_date_time(&event.ends_at)
            ));
            out.push_str(&format!(
                "  total {} | present {} | absent {}\n",
                event.stats.total, event.stats.checked_in, event.stats.absent
            ));
        }
        None if state.is_loading => out.push_str("Loading…\n"),
        None => {}
    }
    out
}

pub fn render_attendee_row(attendee: &Attendee) -> String {
    let badge = if attendee.is_checked_in() {
        "Present"
    } else {
        "Absent"
    };
    format!(
        "[{}] {:<28} {:<30} {} ({})",
        attendee.initial(),
        attendee.name,
        attendee.contact_line(),
        badge,
        attendee.id
    )
}

pub fn empty_message(search_term: &str) -> String {
    let term = search_term.trim();
    if term.is_empty() {
        "No attendees found".to_string()
    } else {
        format!("Nothing found for \"{term}\"")
    }
}

pub fn render_attendees(state: &AttendeeListState) -> String {
    let mut out = String::new();
    if let Some(error) = &state.last_error {
        out.push_str(&format!("! {error} (type 'refresh' to try again)\n"));
    }
    if state.is_loading_first_page || state.is_refreshing {
        out.push_str("Loading…\n");
        return out;
    }
    if state.items.is_empty() {
        if state.last_error.is_none() {
            out.push_str(&empty_message(&state.search_term));
            out.push('\n');
        }
        return out;
    }
    for attendee in &state.items {
        out.push_str(&render_attendee_row(attendee));
        out.push('\n');
    }
    out.push_str(&format!("showing {} of {}", state.items.len(), state.total));
    if state.has_more() {
        out.push_str(" (type 'more' for the next page)");
    }
    out.push('\n');
    out
}

pub fn render_checkin(name: &str, outcome: &CheckinOutcome) -> String {
    match outcome {
        CheckinOutcome::CheckedIn { .. } => format!("Check-in OK: {name} is present."),
        CheckinOutcome::AlreadyPresent {
            checked_in_at: Some(at),
        } => format!("Already present: {name} since {}.", format_clock(at)),
        CheckinOutcome::AlreadyPresent { checked_in_at: None } => {
            format!("Already present: {name} was already checked in.")
        }
        CheckinOutcome::Failed { message } => format!("Error: {message}"),
    }
}

pub fn render_scan(outcome: &ScanOutcome) -> String {
    format!("{}: {}", outcome.title(), outcome.message())
}
