use std::fmt;

use crate::notes::entry::{Entry, local_date_today};
use crate::notes::entry_type::TypeRegistry;

/// Failures of board operations
///
/// The board cannot self-heal an invalid reference, so index errors are
/// propagated to the caller. A filter or reassignment naming an unknown
/// category is `UnknownType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// An entry index outside `[0, len)` was passed to an operation
    IndexOutOfRange { index: usize, len: usize },
    /// A category ordinal outside the registry was requested
    TypeIndexOutOfRange { index: usize, len: usize },
    /// A category name absent from the registry was referenced
    UnknownType(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfRange { index, len } => {
                write!(f, "entry index {} out of range (board has {} entries)", index, len)
            }
            BoardError::TypeIndexOutOfRange { index, len } => {
                write!(f, "entry type index {} out of range (registry has {} types)", index, len)
            }
            BoardError::UnknownType(name) => {
                write!(f, "unknown entry type '{}'", name)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The dev-notes board: an ordered entry list plus its finished counter
///
/// `Vec` is the primary storage for the same reasons the data file is TOML:
/// insertion order is display order, iteration is predictable, and the
/// serialized form produces stable Git-friendly diffs.
///
/// `finished_count` is a cached derived statistic. Mutating operations never
/// maintain it directly; the reconciliation pass in `views.rs` keeps it
/// consistent with the entries' `finished` flags, once per evaluation tick.
pub struct NoteBoard {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    pub(crate) entries: Vec<Entry>,

    /// Number of entries currently counted as finished
    pub(crate) finished_count: u32,

    /// Built-in category catalog; constructed once, never serialized
    pub(crate) registry: TypeRegistry,
}

impl Default for NoteBoard {
    fn default() -> Self {
        Self {
            format_version: 1,
            entries: Vec::new(),
            finished_count: 0,
            registry: TypeRegistry::builtin(),
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl NoteBoard {
    /// Create a new empty board with the built-in type registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The category registry backing this board
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Cached finished-entry counter, accurate as of the last reconciliation
    pub fn finished_count(&self) -> u32 {
        self.finished_count
    }

    /// Append a new unfinished entry of the given category
    ///
    /// The board itself does not reject empty content; callers decide that
    /// policy before adding.
    ///
    /// # Returns
    /// The index of the new entry
    pub fn add_entry(
        &mut self,
        type_name: &str,
        title: &str,
        content: &str,
    ) -> Result<usize, BoardError> {
        if self.registry.find(type_name).is_none() {
            return Err(BoardError::UnknownType(type_name.to_string()));
        }
        self.entries.push(Entry::new(type_name, title, content));
        Ok(self.entries.len() - 1)
    }

    /// Set the completion flag of an entry
    ///
    /// Deliberately leaves `counted_finished` alone: keeping the counter in
    /// step is the reconciliation pass's job, run once per evaluation tick.
    pub fn set_finished(&mut self, index: usize, value: bool) -> Result<(), BoardError> {
        let entry = self.entry_mut(index)?;
        entry.finished = value;
        entry.updated_at = local_date_today();
        Ok(())
    }

    /// Reassign an entry to a different category
    pub fn set_entry_type(&mut self, index: usize, type_name: &str) -> Result<(), BoardError> {
        if self.registry.find(type_name).is_none() {
            return Err(BoardError::UnknownType(type_name.to_string()));
        }
        let entry = self.entry_mut(index)?;
        entry.entry_type = type_name.to_string();
        entry.updated_at = local_date_today();
        Ok(())
    }

    /// Edit the title and/or content of an entry in place
    pub fn update_entry(
        &mut self,
        index: usize,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<(), BoardError> {
        let entry = self.entry_mut(index)?;
        if let Some(title) = title {
            entry.title = title.to_string();
        }
        if let Some(content) = content {
            entry.content = content.to_string();
        }
        entry.updated_at = local_date_today();
        Ok(())
    }

    /// Remove an entry and return it
    ///
    /// If the removed entry was reflected in the finished counter, the
    /// counter is adjusted here so a later reconciliation pass does not
    /// have to notice the disappearance.
    pub fn remove_entry(&mut self, index: usize) -> Result<Entry, BoardError> {
        if index >= self.entries.len() {
            return Err(BoardError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let entry = self.entries.remove(index);
        if entry.counted_finished {
            self.finished_count = self.finished_count.saturating_sub(1);
        }
        Ok(entry)
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry, BoardError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index, len })
    }
}
