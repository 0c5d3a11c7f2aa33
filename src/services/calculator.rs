//! Converts the shared base hour into each selected timezone and grades
//! the result for meeting suitability.
//!
//! The whole module is a pure function of the base hour, the selection
//! list, the injected date, and the timezone database. The local hour
//! used for classification and the displayed time string are derived from
//! the same wall-clock value, so they can never disagree.

use chrono::{DateTime, Duration, LocalResult, TimeZone, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::services::clock::Clock;
use crate::store::SelectionStore;
use crate::utils::format::{format_clock, split_base_hour};

/// Display string used when a row's timezone cannot be resolved.
pub const UNAVAILABLE_TIME: &str = "--:--";

/// Meeting suitability of a local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Core working hours (local hour 9 through 18).
    Good,
    /// Early morning (hours 7-8) or evening (hours 19-22).
    Warning,
    /// Night time (before hour 7 or after hour 22).
    Bad,
}

impl Classification {
    /// Classifies a 24-hour local hour. The `bad` bounds are checked
    /// before the `warning` bounds; that ordering is part of the contract
    /// for the boundary hours 7, 9, 18, and 22.
    pub fn from_local_hour(hour: u32) -> Self {
        if hour < 7 || hour > 22 {
            Classification::Bad
        } else if hour < 9 || hour > 18 {
            Classification::Warning
        } else {
            Classification::Good
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Good => "good",
            Classification::Warning => "warning",
            Classification::Bad => "bad",
        }
    }
}

/// One computed row: a location and its local time for the meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSlot {
    /// Entry label, or its timezone id when the label is empty.
    pub location_name: String,
    /// `H:MM AM/PM` local time, or [`UNAVAILABLE_TIME`] when the
    /// timezone could not be resolved.
    pub display_time: String,
    /// Suitability grade; `None` when the timezone could not be resolved.
    pub classification: Option<Classification>,
}

impl MeetingSlot {
    fn unavailable(location_name: String) -> Self {
        Self {
            location_name,
            display_time: UNAVAILABLE_TIME.to_string(),
            classification: None,
        }
    }
}

/// Computes one slot per selection, in list order.
///
/// The first entry's timezone anchors the computation: the base hour is
/// read as a wall-clock time on today's date in that zone, and the
/// resulting instant is converted into every entry's zone. An entry whose
/// timezone id the database does not recognize degrades to an unavailable
/// slot without affecting the others; if the reference zone itself is
/// unrecognized, every slot is unavailable (there is no instant to
/// convert) but one slot per entry is still produced.
pub fn meeting_times(
    base_hour: f64,
    store: &SelectionStore,
    clock: &dyn Clock,
) -> Vec<MeetingSlot> {
    let Some(reference) = store.first() else {
        return Vec::new();
    };

    let anchor = reference
        .timezone_id
        .parse::<Tz>()
        .ok()
        .and_then(|tz| reference_instant(base_hour, tz, clock));

    store
        .entries()
        .iter()
        .map(|entry| {
            let location_name = entry.display_name().to_string();
            let local = anchor.as_ref().and_then(|instant| {
                entry
                    .timezone_id
                    .parse::<Tz>()
                    .ok()
                    .map(|tz| instant.with_timezone(&tz))
            });
            match local {
                Some(local) => MeetingSlot {
                    location_name,
                    display_time: format_clock(local.hour(), local.minute()),
                    classification: Some(Classification::from_local_hour(local.hour())),
                },
                None => MeetingSlot::unavailable(location_name),
            }
        })
        .collect()
}

/// Resolves the base hour to an absolute instant: today's date in the
/// reference zone at `floor(base_hour)` hours and the fractional part as
/// minutes. Wall-clock times that fall in a daylight-saving gap step
/// forward until they exist; ambiguous times take the earlier offset.
fn reference_instant(base_hour: f64, tz: Tz, clock: &dyn Clock) -> Option<DateTime<Tz>> {
    let (hour, minute) = split_base_hour(base_hour);
    let date = clock.today_in(tz);
    let mut naive = date.and_hms_opt(hour, minute, 0)?;

    // DST gaps are at most an hour in practice; a handful of quarter-hour
    // steps always lands on a representable time.
    for _ in 0..8 {
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => return Some(dt),
            LocalResult::None => naive += Duration::minutes(15),
        }
    }
    None
}
