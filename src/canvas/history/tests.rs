//! Unit tests for the history module.

use im::vector;

use super::snapshot::Snapshot;
use super::snapshot_history::SnapshotHistory;
use crate::canvas::text_item::{FontFamily, ItemId, TextItem};

fn snapshot_with(count: u64) -> Snapshot {
    Snapshot {
        selected: None,
        items: (0..count)
            .map(|id| TextItem::new(ItemId(id), FontFamily::Default))
            .collect(),
    }
}

#[test]
fn test_history_starts_empty() {
    let history = SnapshotHistory::default();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.limit(), None);
}

#[test]
fn test_record_enables_undo() {
    let mut history = SnapshotHistory::default();
    history.record(snapshot_with(0));
    assert!(history.can_undo());
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn test_undo_returns_recorded_and_parks_current() {
    let mut history = SnapshotHistory::default();
    history.record(snapshot_with(0));

    let restored = history.undo(snapshot_with(1));
    assert_eq!(restored, Some(snapshot_with(0)));
    assert!(!history.can_undo());
    assert!(history.can_redo());

    let redone = history.redo(snapshot_with(0));
    assert_eq!(redone, Some(snapshot_with(1)));
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_redo_on_empty_stacks() {
    let mut history = SnapshotHistory::default();
    assert_eq!(history.undo(snapshot_with(1)), None);
    assert_eq!(history.redo(snapshot_with(1)), None);
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_record_clears_redo() {
    let mut history = SnapshotHistory::default();
    history.record(snapshot_with(0));
    history.record(snapshot_with(1));

    history.undo(snapshot_with(2));
    assert!(history.can_redo());

    history.record(snapshot_with(3));
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 2);
}

#[test]
fn test_limit_evicts_oldest() {
    let mut history = SnapshotHistory::with_limit(Some(3));
    for count in 0..5 {
        history.record(snapshot_with(count));
    }
    assert_eq!(history.undo_depth(), 3);

    // Oldest surviving entry is the third recorded one
    let mut current = snapshot_with(5);
    let mut last = None;
    while let Some(previous) = history.undo(current.clone()) {
        current = previous.clone();
        last = Some(previous);
    }
    assert_eq!(last, Some(snapshot_with(2)));
}

#[test]
fn test_set_limit_trims_existing_entries() {
    let mut history = SnapshotHistory::default();
    for count in 0..10 {
        history.record(snapshot_with(count));
    }
    history.set_limit(Some(4));
    assert_eq!(history.undo_depth(), 4);

    history.set_limit(None);
    history.record(snapshot_with(10));
    assert_eq!(history.undo_depth(), 5);
}

#[test]
fn test_redo_respects_limit() {
    let mut history = SnapshotHistory::with_limit(Some(1));
    history.record(snapshot_with(0));
    history.undo(snapshot_with(1));
    history.redo(snapshot_with(0));
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn test_snapshot_item_count_includes_selection() {
    let snapshot = Snapshot {
        selected: Some(TextItem::new(ItemId(9), FontFamily::Default)),
        items: vector![TextItem::new(ItemId(1), FontFamily::Default)],
    };
    assert_eq!(snapshot.item_count(), 2);
    assert_eq!(Snapshot::default().item_count(), 0);
}
