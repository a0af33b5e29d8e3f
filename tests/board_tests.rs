//! Board-level tests for the core data model and filter/counter logic

use devnotes_mcp::{BoardError, EntryFilter, NoteBoard};

#[test]
fn test_all_returns_entries_in_insertion_order() {
    let mut board = NoteBoard::new();
    for content in ["alpha", "beta", "gamma", "delta"] {
        board.add_entry("Note", "", content).unwrap();
    }

    let contents: Vec<&str> = board.entries().iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn test_finished_count_matches_flags_after_reconcile() {
    let mut board = NoteBoard::new();
    for i in 0..10 {
        board.add_entry("TODO", "", &format!("task {}", i)).unwrap();
    }

    // An arbitrary toggle sequence, some entries flipped more than once
    board.set_finished(0, true).unwrap();
    board.set_finished(3, true).unwrap();
    board.set_finished(3, false).unwrap();
    board.set_finished(7, true).unwrap();
    board.set_finished(9, true).unwrap();
    board.set_finished(9, false).unwrap();
    board.set_finished(9, true).unwrap();

    board.reconcile();

    let expected = board.entries().iter().filter(|e| e.finished).count() as u32;
    assert_eq!(board.finished_count(), expected);
    assert_eq!(board.finished_count(), 3);
}

#[test]
fn test_reconcile_twice_without_mutation_is_stable() {
    let mut board = NoteBoard::new();
    board.add_entry("Bug", "", "a").unwrap();
    board.add_entry("Bug", "", "b").unwrap();
    board.set_finished(0, true).unwrap();

    let first = board.reconcile();
    let second = board.reconcile();
    assert_eq!(first, second);
}

#[test]
fn test_single_todo_entry_scenario() {
    let mut board = NoteBoard::new();
    assert_eq!(board.registry().len(), 9);

    board.add_entry("TODO", "", "fix bug").unwrap();

    assert_eq!(board.entries().len(), 1);
    assert!(!board.entries()[0].finished);
    board.reconcile();
    assert_eq!(board.finished_count(), 0);
}

#[test]
fn test_three_bugs_two_finished_scenario() {
    let mut board = NoteBoard::new();
    board.add_entry("Bug", "", "crash on save").unwrap();
    board.add_entry("Bug", "", "wrong color").unwrap();
    board.add_entry("Bug", "", "slow startup").unwrap();

    board.set_finished(0, true).unwrap();
    board.set_finished(2, true).unwrap();
    board.reconcile();

    assert_eq!(board.finished_count(), 2);

    let view = board.view(&EntryFilter::Type("Bug".to_string()));
    assert_eq!(view.active.len(), 1);
    assert_eq!(view.finished.len(), 2);
    assert_eq!(view.active[0].1.content, "wrong color");
}

#[test]
fn test_recategorize_moves_entry_between_filters() {
    let mut board = NoteBoard::new();
    board.add_entry("TODO", "", "document the loader").unwrap();

    board.set_entry_type(0, "Note").unwrap();

    let todo = board.view(&EntryFilter::Type("TODO".to_string()));
    let note = board.view(&EntryFilter::Type("Note".to_string()));
    assert!(todo.active.is_empty() && todo.finished.is_empty());
    assert_eq!(note.active.len(), 1);
}

#[test]
fn test_set_finished_out_of_range_boundary() {
    let mut board = NoteBoard::new();
    board.add_entry("TODO", "", "a").unwrap();
    board.add_entry("TODO", "", "b").unwrap();
    board.add_entry("TODO", "", "c").unwrap();

    let err = board.set_finished(99, true).unwrap_err();
    assert_eq!(err, BoardError::IndexOutOfRange { index: 99, len: 3 });
}

#[test]
fn test_filter_partition_preserves_per_type_order() {
    let mut board = NoteBoard::new();
    board.add_entry("TODO", "", "t1").unwrap();
    board.add_entry("Bug", "", "b1").unwrap();
    board.add_entry("TODO", "", "t2").unwrap();
    board.add_entry("Bug", "", "b2").unwrap();

    let all = board.view(&EntryFilter::All);
    let order: Vec<usize> = all.active.iter().map(|(i, _)| *i).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);

    let bugs = board.view(&EntryFilter::Type("Bug".to_string()));
    let bug_contents: Vec<&str> = bugs.active.iter().map(|(_, e)| e.content.as_str()).collect();
    assert_eq!(bug_contents, vec!["b1", "b2"]);
}

#[test]
fn test_delete_then_reconcile_keeps_counter_accurate() {
    let mut board = NoteBoard::new();
    board.add_entry("TODO", "", "a").unwrap();
    board.add_entry("Bug", "", "b").unwrap();
    board.add_entry("Note", "", "c").unwrap();
    board.set_finished(0, true).unwrap();
    board.set_finished(1, true).unwrap();
    board.reconcile();
    assert_eq!(board.finished_count(), 2);

    board.remove_entry(1).unwrap();
    assert_eq!(board.finished_count(), 1);

    // A further pass over the remaining entries changes nothing
    assert_eq!(board.reconcile(), 1);
}
