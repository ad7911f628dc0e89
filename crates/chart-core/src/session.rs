// File: crates/chart-core/src/session.rs
// Summary: Displayed-result holder for overlapping loads; the latest started run wins.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::pipeline::ActivityCharts;

/// Issued by [`ChartSession::begin`]; identifies one pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunTicket(u64);

#[derive(Default)]
struct State {
    latest: u64,
    shown: Option<(RunTicket, Arc<ActivityCharts>)>,
}

/// Shared between the file-selection side and whatever displays charts.
///
/// A new selection calls `begin`, runs the pipeline, then `publish`es. Results
/// from a ticket that has since been superseded (or cleared) are dropped.
#[derive(Default)]
pub struct ChartSession {
    state: Mutex<State>,
}

impl ChartSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic mid-publish leaves the state consistent; keep going.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn begin(&self) -> RunTicket {
        let mut st = self.lock();
        st.latest += 1;
        debug!(run = st.latest, "run started");
        RunTicket(st.latest)
    }

    pub fn is_current(&self, ticket: RunTicket) -> bool {
        self.lock().latest == ticket.0
    }

    /// Store `charts` as the displayed result if `ticket` is still the latest run.
    /// Returns false (and drops `charts`) for a stale ticket.
    pub fn publish(&self, ticket: RunTicket, charts: ActivityCharts) -> bool {
        let mut st = self.lock();
        if st.latest != ticket.0 {
            info!(run = ticket.0, latest = st.latest, "discarding stale run");
            return false;
        }
        st.shown = Some((ticket, Arc::new(charts)));
        true
    }

    pub fn current(&self) -> Option<Arc<ActivityCharts>> {
        self.lock().shown.as_ref().map(|(_, c)| Arc::clone(c))
    }

    pub fn current_ticket(&self) -> Option<RunTicket> {
        self.lock().shown.as_ref().map(|(t, _)| *t)
    }

    /// Drop the displayed result and invalidate any run still in flight.
    pub fn clear(&self) {
        let mut st = self.lock();
        st.latest += 1;
        st.shown = None;
    }
}
