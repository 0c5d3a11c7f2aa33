//! The planner facade: one explicit state object holding the selection
//! list and the base hour, mutated by UI events and recomputed on demand.
//!
//! Every operation runs to completion synchronously, so a view taken
//! after any mutation always reflects the whole mutation. There is no
//! hidden global state; the rendering collaborator owns a planner value
//! and threads it through its event handlers.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::calculator::{meeting_times, MeetingSlot};
use crate::services::clock::{Clock, SystemClock};
use crate::store::{SelectionStore, TimezoneEntry};
use crate::utils::format::format_base_hour;
use crate::utils::logging::{log_recompute, log_seed, log_store_op};

/// Base hour a planner starts with before the collaborator sets one.
pub const DEFAULT_BASE_HOUR: f64 = 9.0;

/// Largest representable base hour (23:59).
const MAX_BASE_HOUR: f64 = 23.0 + 59.0 / 60.0;

/// Everything the rendering collaborator needs to paint the results:
/// the formatted base-hour readout and one slot per selection, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerView {
    /// 12-hour rendering of the base hour.
    pub base_time: String,
    /// Computed meeting times, one per selection in list order.
    pub slots: Vec<MeetingSlot>,
}

/// Owns the selection list and base hour, and turns them into views.
#[derive(Debug, Clone)]
pub struct MeetingPlanner<C: Clock = SystemClock> {
    store: SelectionStore,
    base_hour: f64,
    clock: C,
}

impl MeetingPlanner<SystemClock> {
    /// Creates an empty planner on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MeetingPlanner<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MeetingPlanner<C> {
    /// Creates an empty planner with an injected clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: SelectionStore::new(),
            base_hour: DEFAULT_BASE_HOUR,
            clock,
        }
    }

    /// Seeds the startup selections: the platform-detected local timezone
    /// labelled "Your Location", then the configured default timezone.
    /// If detection fails the default timezone stands in for the local
    /// one, so startup never fails.
    pub fn seed(&mut self, default_timezone: &str, default_label: &str) {
        let local = match iana_time_zone::get_timezone() {
            Ok(zone) => {
                log_seed(&zone);
                zone
            }
            Err(err) => {
                warn!(
                    "SEED: local timezone detection failed ({}), using {}",
                    err, default_timezone
                );
                default_timezone.to_string()
            }
        };
        self.add_timezone(&local, "Your Location");
        self.add_timezone(default_timezone, default_label);
    }

    /// Appends a selection and returns its id.
    pub fn add_timezone(&mut self, timezone_id: &str, label: &str) -> String {
        let id = self.store.add(timezone_id, label);
        log_store_op("add", &id, Some(timezone_id));
        id
    }

    /// Renames a selection; no-op for unknown ids.
    pub fn update_label(&mut self, id: &str, label: &str) {
        self.store.update_label(id, label);
        log_store_op("update_label", id, Some(label));
    }

    /// Changes a selection's timezone; no-op for unknown ids.
    pub fn update_timezone(&mut self, id: &str, timezone_id: &str) {
        self.store.update_timezone(id, timezone_id);
        log_store_op("update_timezone", id, Some(timezone_id));
    }

    /// Removes a selection; no-op for unknown ids.
    pub fn remove(&mut self, id: &str) {
        self.store.remove(id);
        log_store_op("remove", id, None);
    }

    /// Sets the base hour, clamping out-of-range values into `[0, 24)`.
    /// The slider surface can only leave the range through a bug, so a
    /// warning plus clamp beats faulting the core.
    pub fn set_base_hour(&mut self, hour: f64) {
        let clamped = clamp_base_hour(hour);
        if clamped != hour {
            warn!("Base hour {} out of range, clamped to {}", hour, clamped);
        }
        self.base_hour = clamped;
    }

    /// The current base hour.
    pub fn base_hour(&self) -> f64 {
        self.base_hour
    }

    /// Current selections, for rendering editable rows.
    pub fn entries(&self) -> &[TimezoneEntry] {
        self.store.entries()
    }

    /// Recomputes every meeting time from the current state.
    pub fn view(&self) -> PlannerView {
        let slots = meeting_times(self.base_hour, &self.store, &self.clock);
        let view = PlannerView {
            base_time: format_base_hour(self.base_hour),
            slots,
        };
        log_recompute(view.slots.len(), &view.base_time);
        view
    }
}

fn clamp_base_hour(hour: f64) -> f64 {
    if !hour.is_finite() || hour < 0.0 {
        0.0
    } else if hour >= 24.0 {
        MAX_BASE_HOUR
    } else {
        hour
    }
}
