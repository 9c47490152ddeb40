use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    fetches: AtomicU64,
    fetch_errors: AtomicU64,
    checkins: AtomicU64,
    conflicts: AtomicU64,
    checkin_errors: AtomicU64,
    rejected_scans: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub fetches: u64,
    pub fetch_errors: u64,
    pub checkins: u64,
    pub conflicts: u64,
    pub checkin_errors: u64,
    pub rejected_scans: u64,
}

impl Metrics {
    pub fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch_error(&self) {
        self.fetch_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_checkin(&self) {
        self.checkins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_conflict(&self) {
        self.conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_checkin_error(&self) {
        self.checkin_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_scan(&self) {
        self.rejected_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            fetches: self.fetches.load(Ordering::Relaxed),
            fetch_errors: self.fetch_errors.load(Ordering::Relaxed),
            checkins: self.checkins.load(Ordering::Relaxed),
            conflicts: self.conflicts.load(Ordering::Relaxed),
            checkin_errors: self.checkin_errors.load(Ordering::Relaxed),
            rejected_scans: self.rejected_scans.load(Ordering::Relaxed),
        }
    }

    pub fn render_summary(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "fetches={} fetch_errors={} checkins={} conflicts={} checkin_errors={} rejected_scans={}",
            snapshot.fetches,
            snapshot.fetch_errors,
            snapshot.checkins,
            snapshot.conflicts,
            snapshot.checkin_errors,
            snapshot.rejected_scans
        )
    }
}
