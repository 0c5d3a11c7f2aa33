//! The ordered list of timezone selections.
//!
//! The store owns the list exclusively; every change goes through the
//! mutation methods here. List order is insertion order and is
//! significant: the first entry is the reference timezone in which the
//! base hour is interpreted.

/// Well-known timezone choices for a selection dropdown
pub mod catalog;
mod entry;

pub use entry::TimezoneEntry;

/// Ordered collection of timezone selections.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    entries: Vec<TimezoneEntry>,
}

impl SelectionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry and returns its freshly generated id.
    ///
    /// Any string is accepted as a timezone id; unrecognized ids surface
    /// later as an unavailable row rather than an error here.
    pub fn add(&mut self, timezone_id: &str, label: &str) -> String {
        let entry = TimezoneEntry::new(timezone_id, label);
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Replaces the label of the entry with the given id. Unknown ids are
    /// tolerated as a no-op so stale UI references cannot fault the core.
    pub fn update_label(&mut self, id: &str, label: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.label = label.to_string();
        }
    }

    /// Replaces the timezone id of the entry with the given id; no-op for
    /// unknown ids.
    pub fn update_timezone(&mut self, id: &str, timezone_id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.timezone_id = timezone_id.to_string();
        }
    }

    /// Removes the entry with the given id; no-op for unknown ids. If the
    /// removed entry was first, the next entry becomes the reference.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[TimezoneEntry] {
        &self.entries
    }

    /// The reference entry, if any.
    pub fn first(&self) -> Option<&TimezoneEntry> {
        self.entries.first()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no timezones are selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
