//! Serialization and deserialization implementations for NoteBoard
//!
//! The board serializes to a flat TOML document: a format version, the
//! cached finished counter, and one `[[entry]]` table per entry in insertion
//! order. The type registry is static configuration and is never written to
//! disk; deserialization rebuilds it and then runs a reconciliation pass so
//! the cached counter is trustworthy regardless of what the file claimed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::board::NoteBoard;
use super::entry::Entry;
use super::entry_type::TypeRegistry;

#[derive(Deserialize, Default)]
#[serde(default)]
struct NoteBoardFile {
    #[allow(dead_code)]
    format_version: u32,
    entry: Vec<Entry>,
}

impl<'de> Deserialize<'de> for NoteBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = NoteBoardFile::deserialize(deserializer)?;

        // The counter is derived state; trust the entry flags, not whatever
        // counter the file carried
        let counted = file.entry.iter().filter(|e| e.counted_finished).count() as u32;

        let mut board = NoteBoard {
            format_version: 1,
            entries: file.entry,
            finished_count: counted,
            registry: TypeRegistry::builtin(),
        };
        board.reconcile();

        Ok(board)
    }
}

impl Serialize for NoteBoard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("NoteBoard", 3)?;
        state.serialize_field("format_version", &self.format_version)?;
        if self.finished_count != 0 {
            state.serialize_field("finished_count", &self.finished_count)?;
        }
        if !self.entries.is_empty() {
            state.serialize_field("entry", &self.entries)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::views::EntryFilter;

    #[test]
    fn test_round_trip_preserves_entries_and_order() {
        let mut board = NoteBoard::new();
        board.add_entry("TODO", "title-a", "first").unwrap();
        board.add_entry("Bug", "", "second").unwrap();
        board.set_finished(1, true).unwrap();
        board.reconcile();

        let toml_str = toml::to_string_pretty(&board).unwrap();
        let loaded: NoteBoard = toml::from_str(&toml_str).unwrap();

        assert_eq!(loaded.entries().len(), 2);
        assert_eq!(loaded.entries()[0].content, "first");
        assert_eq!(loaded.entries()[0].title, "title-a");
        assert_eq!(loaded.entries()[1].content, "second");
        assert!(loaded.entries()[1].finished);
        assert_eq!(loaded.finished_count(), 1);
    }

    #[test]
    fn test_registry_not_serialized_and_rebuilt() {
        let board = NoteBoard::new();
        let toml_str = toml::to_string(&board).unwrap();
        assert!(!toml_str.contains("registry"));
        assert!(!toml_str.contains("TODO"));

        let loaded: NoteBoard = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.registry().len(), 9);
    }

    #[test]
    fn test_counter_reconciled_on_load() {
        // A file with a stale counter: two finished entries, counter says 0
        let toml_str = r#"
    format_version = 1

    [[entry]]
    entry_type = "Bug"
    content = "first"
    finished = true
    counted_finished = true

    [[entry]]
    entry_type = "Bug"
    content = "second"
    finished = true
    "#;

        let board: NoteBoard = toml::from_str(toml_str).unwrap();
        assert_eq!(board.finished_count(), 1 + 1);
    }

    #[test]
    fn test_entry_with_unregistered_type_survives_load() {
        // Categories may change between versions; entries keep their name
        // and simply match no filter until recategorized.
        let toml_str = r#"
    format_version = 1

    [[entry]]
    entry_type = "Retired Category"
    content = "old note"
    "#;

        let board: NoteBoard = toml::from_str(toml_str).unwrap();
        assert_eq!(board.entries().len(), 1);

        let view = board.view(&EntryFilter::Type("Retired Category".to_string()));
        assert_eq!(view.active.len(), 1);
        assert!(board.registry().find("Retired Category").is_none());
    }

    #[test]
    fn test_empty_file_loads_fresh_board() {
        let board: NoteBoard = toml::from_str("").unwrap();
        assert!(board.entries().is_empty());
        assert_eq!(board.finished_count(), 0);
        assert_eq!(board.format_version, 1);
    }
}
