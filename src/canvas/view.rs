//! Read-only canvas state published for the view layer.
//!
//! Systems that render the canvas read [`CanvasView`] and rely on bevy change
//! detection; it is only written when the engine revision moves.

use bevy::prelude::*;

use super::document::Document;
use super::engine::CanvasState;
use super::text_item::TextItem;

/// Published copy of the selection, items and undo/redo availability
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct CanvasView {
    document: Document,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Engine revision this view was built from
    pub revision: u64,
}

impl CanvasView {
    pub fn from_state(state: &CanvasState) -> Self {
        Self {
            // Persistent collections make this clone cheap
            document: state.document().clone(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
            revision: state.revision(),
        }
    }

    pub fn selected(&self) -> Option<&TextItem> {
        self.document.selected()
    }

    pub fn items(&self) -> impl Iterator<Item = &TextItem> {
        self.document.items().iter()
    }

    /// Placed items first, then the selection, in paint order
    pub fn paint_order(&self) -> impl Iterator<Item = &TextItem> {
        self.items().chain(self.selected())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}
