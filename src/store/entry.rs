use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user-selected timezone in the comparison list.
///
/// The `id` is assigned at creation and never changes; editing operations
/// locate the entry by it. The timezone id is any string the user supplied
/// and may turn out to be unrecognized at conversion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneEntry {
    /// Opaque unique identifier, stable for the entry's lifetime.
    pub id: String,
    /// IANA-style timezone identifier chosen by the user.
    pub timezone_id: String,
    /// Free-text display name; may be empty.
    pub label: String,
}

impl TimezoneEntry {
    pub(crate) fn new(timezone_id: &str, label: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timezone_id: timezone_id.to_string(),
            label: label.to_string(),
        }
    }

    /// The name shown for this entry: its label, or the timezone id when
    /// the label is empty.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.timezone_id
        } else {
            &self.label
        }
    }
}
