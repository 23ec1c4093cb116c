//! Commands the view layer sends to the canvas engine.

use bevy::prelude::*;

use super::text_item::{FontFamily, ItemId};

/// A request to change the canvas, processed in the order written
#[derive(Message, Clone, Debug, PartialEq)]
pub enum CanvasCommand {
    /// Make a placed item the selection
    Select(ItemId),
    /// Return the selection to the item collection
    Deselect,
    /// Move the selection by a delta (one step of a drag)
    MoveSelected(Vec2),
    /// Finish a drag, recording it in history
    CommitMove,
    /// Replace the selected item's text
    SetText(String),
    IncreaseFontSize,
    DecreaseFontSize,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    SetFontFamily(FontFamily),
    /// Create and select a new default item
    AddItem,
    Undo,
    Redo,
}

impl CanvasCommand {
    /// Whether this command changes undo history when it takes effect
    pub fn is_recorded(&self) -> bool {
        !matches!(
            self,
            CanvasCommand::Select(_)
                | CanvasCommand::Deselect
                | CanvasCommand::MoveSelected(_)
                | CanvasCommand::SetText(_)
                | CanvasCommand::Undo
                | CanvasCommand::Redo
        )
    }
}

/// Written after the published canvas view has been refreshed
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasChanged {
    pub revision: u64,
}
