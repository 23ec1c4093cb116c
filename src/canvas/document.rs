//! The live document: placed items plus the item currently being edited.

use bevy::prelude::*;
use im::Vector;

use super::history::Snapshot;
use super::text_item::{ItemId, TextItem};

/// Items on the canvas and the current selection.
///
/// The selected item is held outside `items` while it is being edited,
/// so an item is always in exactly one of the two places.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    items: Vector<TextItem>,
    selected: Option<TextItem>,
}

impl Document {
    pub fn items(&self) -> &Vector<TextItem> {
        &self.items
    }

    pub fn selected(&self) -> Option<&TextItem> {
        self.selected.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Capture the current state for the history stacks
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            selected: self.selected.clone(),
            items: self.items.clone(),
        }
    }

    /// Replace the whole state with a previously captured snapshot
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.selected = snapshot.selected;
        self.items = snapshot.items;
    }

    /// Move the selection back into `items`, appended at the end.
    ///
    /// Returns the id of the item that was released, if any.
    pub fn release_selection(&mut self) -> Option<ItemId> {
        let item = self.selected.take()?;
        let id = item.id;
        self.items.push_back(item);
        Some(id)
    }

    /// Take `id` out of `items` and make it the selection.
    ///
    /// Any previous selection is released first. Unknown ids leave the
    /// document untouched.
    pub fn take_selection(&mut self, id: ItemId) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.release_selection();
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        self.selected = Some(self.items.remove(index));
        true
    }

    /// Select a brand-new item, releasing any current selection first
    pub fn insert_selected(&mut self, item: TextItem) {
        self.release_selection();
        self.selected = Some(item);
    }

    /// Swap the selected item for an updated copy.
    ///
    /// Returns false when nothing is selected.
    pub fn map_selected(&mut self, f: impl FnOnce(&TextItem) -> TextItem) -> bool {
        match self.selected.as_ref() {
            Some(item) => {
                self.selected = Some(f(item));
                true
            }
            None => false,
        }
    }

    /// Hit test against approximate item bounds, topmost (last inserted) first.
    ///
    /// `size_of` supplies the rendered size of an item; the engine itself
    /// does no text layout.
    pub fn item_at(&self, point: Vec2, size_of: impl Fn(&TextItem) -> Vec2) -> Option<ItemId> {
        let contains = |item: &TextItem| {
            let size = size_of(item);
            let min = item.position;
            let max = item.position + size;
            point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
        };

        if let Some(selected) = self.selected.as_ref()
            && contains(selected)
        {
            return Some(selected.id);
        }
        self.items.iter().rev().find(|item| contains(item)).map(|item| item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::text_item::FontFamily;

    fn item(id: u64) -> TextItem {
        TextItem::new(ItemId(id), FontFamily::Default)
    }

    fn document_with(ids: &[u64]) -> Document {
        let mut document = Document::default();
        for id in ids {
            document.items.push_back(item(*id));
        }
        document
    }

    #[test]
    fn test_take_selection_moves_item_out_of_items() {
        let mut document = document_with(&[1, 2, 3]);
        assert!(document.take_selection(ItemId(2)));
        assert_eq!(document.selected().map(|i| i.id), Some(ItemId(2)));
        let ids: Vec<_> = document.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
    }

    #[test]
    fn test_take_selection_releases_previous_to_end() {
        let mut document = document_with(&[1, 2, 3]);
        document.take_selection(ItemId(1));
        document.take_selection(ItemId(3));
        let ids: Vec<_> = document.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(2), ItemId(1)]);
        assert_eq!(document.selected().map(|i| i.id), Some(ItemId(3)));
    }

    #[test]
    fn test_take_selection_unknown_id_is_noop() {
        let mut document = document_with(&[1]);
        document.take_selection(ItemId(1));
        let before = document.clone();
        assert!(!document.take_selection(ItemId(42)));
        assert_eq!(document, before);
    }

    #[test]
    fn test_take_selection_of_selected_id_is_noop() {
        let mut document = document_with(&[1, 2]);
        document.take_selection(ItemId(1));
        let before = document.clone();
        assert!(!document.take_selection(ItemId(1)));
        assert_eq!(document, before);
    }

    #[test]
    fn test_release_selection_appends() {
        let mut document = document_with(&[1, 2]);
        document.take_selection(ItemId(1));
        assert_eq!(document.release_selection(), Some(ItemId(1)));
        assert!(document.selected().is_none());
        assert_eq!(document.items().back().map(|i| i.id), Some(ItemId(1)));
        assert_eq!(document.release_selection(), None);
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut document = document_with(&[1, 2]);
        document.take_selection(ItemId(2));
        let snapshot = document.snapshot();

        document.map_selected(|i| i.with_text("changed".into()));
        document.release_selection();
        assert_ne!(document.snapshot(), snapshot);

        document.restore(snapshot.clone());
        assert_eq!(document.snapshot(), snapshot);
    }

    #[test]
    fn test_item_at_prefers_selection_then_topmost() {
        let mut document = document_with(&[1, 2]);
        let size = |_: &TextItem| Vec2::new(50.0, 20.0);
        // Both items share the default position; the last inserted is on top
        assert_eq!(document.item_at(Vec2::new(110.0, 110.0), size), Some(ItemId(2)));

        document.take_selection(ItemId(1));
        assert_eq!(document.item_at(Vec2::new(110.0, 110.0), size), Some(ItemId(1)));
        assert_eq!(document.item_at(Vec2::new(10.0, 10.0), size), None);
    }
}
