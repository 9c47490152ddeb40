// Screen controllers: own per-screen state and turn user intents into calls

pub mod attendee_list;
pub mod event_summary;
pub mod qr_scan;

pub use attendee_list::*;
pub use event_summary::*;
pub use qr_scan::*;

/// How a fetch issued by a controller ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { received: usize },
    /// Nothing to do: no more pages, or a load is already running.
    Skipped,
    /// A newer load started before this one finished; its result was dropped.
    Stale,
    Failed,
}
