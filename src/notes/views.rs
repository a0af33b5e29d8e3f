//! Filtered views and the finished-counter reconciliation pass
//!
//! The presentation layer asks for an `EntryView` once per evaluation tick:
//! the filter-matching entries partitioned into active and finished buckets,
//! insertion order preserved within each. The reconciliation pass that keeps
//! the cached finished counter honest lives here too, and runs over the
//! whole board exactly once per tick, never per filtered subset.

use std::str::FromStr;

use super::board::NoteBoard;
use super::entry::Entry;

/// Selection criterion for which entries to present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    /// Every entry matches, regardless of category
    All,
    /// Only entries of the named category match
    Type(String),
}

impl FromStr for EntryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(EntryFilter::All)
        } else {
            Ok(EntryFilter::Type(s.to_string()))
        }
    }
}

/// A filter-matching snapshot of the board, partitioned by completion
///
/// Each bucket holds `(board index, entry)` pairs so the presentation layer
/// can address toggles and edits back at the store.
pub struct EntryView<'a> {
    pub active: Vec<(usize, &'a Entry)>,
    pub finished: Vec<(usize, &'a Entry)>,
}

impl NoteBoard {
    /// Partition filter-matching entries into active and finished buckets
    ///
    /// Matching is by category-name equality. A filter naming a category
    /// absent from the registry simply matches nothing; that is a policy
    /// choice, not an error.
    pub fn view(&self, filter: &EntryFilter) -> EntryView<'_> {
        let mut active = Vec::new();
        let mut finished = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let matches = match filter {
                EntryFilter::All => true,
                EntryFilter::Type(name) => entry.entry_type == *name,
            };
            if !matches {
                continue;
            }
            if entry.finished {
                finished.push((index, entry));
            } else {
                active.push((index, entry));
            }
        }

        EntryView { active, finished }
    }

    /// Reconcile the finished counter with the entries' completion flags
    ///
    /// One global pass over the whole collection: an entry that turned
    /// finished since the last pass is counted exactly once, an entry that
    /// was reopened is uncounted exactly once. Running the pass again with
    /// no intervening mutation changes nothing.
    ///
    /// # Returns
    /// The reconciled finished count
    pub fn reconcile(&mut self) -> u32 {
        for entry in self.entries.iter_mut() {
            if entry.finished && !entry.counted_finished {
                self.finished_count += 1;
                entry.counted_finished = true;
            } else if !entry.finished && entry.counted_finished {
                self.finished_count = self.finished_count.saturating_sub(1);
                entry.counted_finished = false;
            }
        }
        self.finished_count
    }
}
