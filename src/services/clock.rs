use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of "today's date" as observed in a given timezone.
///
/// Meeting times depend on the ambient calendar date (daylight-saving
/// offsets change through the year), so the date is injected rather than
/// read from the system clock inside the calculator. Tests pin it with
/// [`FixedClock`].
pub trait Clock {
    /// The current civil date in the given timezone.
    fn today_in(&self, tz: Tz) -> NaiveDate;
}

/// Clock backed by the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_in(&self, tz: Tz) -> NaiveDate {
        Utc::now().with_timezone(&tz).date_naive()
    }
}

/// Clock pinned to a fixed instant, for deterministic computation.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn today_in(&self, tz: Tz) -> NaiveDate {
        self.instant.with_timezone(&tz).date_naive()
    }
}
