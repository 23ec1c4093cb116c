//! Immutable capture of the document for the history stacks.

use im::Vector;

use super::super::text_item::TextItem;

/// The selection and item collection at a point in time.
///
/// `items` is a persistent vector, so cloning a snapshot shares structure
/// with the live document instead of copying every item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub selected: Option<TextItem>,
    pub items: Vector<TextItem>,
}

impl Snapshot {
    /// Total number of items, counting the selection
    pub fn item_count(&self) -> usize {
        self.items.len() + usize::from(self.selected.is_some())
    }
}
