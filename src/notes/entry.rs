use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single note/task entry on the board
///
/// Entries reference their category by name (`entry_type`), not by ordinal,
/// so the reference stays valid no matter how the selector maps categories
/// to indices. `title` is persisted even though the current presentation
/// layer only renders `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Name of the category this entry belongs to (e.g., "Bug", "TODO")
    pub entry_type: String,
    /// Short title, kept for the file format but not rendered
    pub title: String,
    /// Free-text body of the entry
    pub content: String,
    /// Completion flag, toggled by the user in both directions
    pub finished: bool,
    /// Bookkeeping flag: whether this entry is currently reflected in the
    /// board's finished counter. Only the reconciliation pass may touch it.
    pub counted_finished: bool,
    /// Date when the entry was created
    pub created_at: NaiveDate,
    /// Date when the entry was last updated
    pub updated_at: NaiveDate,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            entry_type: String::new(),
            title: String::new(),
            content: String::new(),
            finished: false,
            counted_finished: false,
            created_at: local_date_today(),
            updated_at: local_date_today(),
        }
    }
}

impl Entry {
    /// Create a new unfinished entry
    pub fn new(entry_type: &str, title: &str, content: &str) -> Self {
        Self {
            entry_type: entry_type.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }
}
