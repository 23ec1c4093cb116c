//! Canvas state engine: owns the document and its history.
//!
//! All edits go through [`CanvasState`]. Operations whose preconditions are
//! not met (no selection, empty stacks, unknown ids) are silent no-ops and
//! return `false`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::commands::CanvasCommand;
use super::document::Document;
use super::history::{Snapshot, SnapshotHistory};
use super::text_item::{FontFamily, ItemId, TextItem};

/// Which state a finished drag records in history
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragCommitMode {
    /// Record the state from before the drag started, so undo puts the item back
    #[default]
    PreDrag,
    /// Record the state at the moment the drag finishes (item already moved)
    PostDrag,
}

/// Resource holding the single canvas document and its undo/redo history
#[derive(Resource, Debug, Default)]
pub struct CanvasState {
    document: Document,
    history: SnapshotHistory,
    /// Pre-drag state captured on the first position update of a drag
    drag_origin: Option<Snapshot>,
    drag_commit_mode: DragCommitMode,
    default_font_family: FontFamily,
    next_id: u64,
    /// Bumped whenever the document or history changes
    revision: u64,
}

impl CanvasState {
    pub fn selected(&self) -> Option<&TextItem> {
        self.document.selected()
    }

    pub fn items(&self) -> &im::Vector<TextItem> {
        self.document.items()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn drag_commit_mode(&self) -> DragCommitMode {
        self.drag_commit_mode
    }

    pub fn set_drag_commit_mode(&mut self, mode: DragCommitMode) {
        self.drag_commit_mode = mode;
    }

    pub fn set_default_font_family(&mut self, family: FontFamily) {
        self.default_font_family = family;
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history.limit()
    }

    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        let before = (self.history.undo_depth(), self.history.redo_depth());
        self.history.set_limit(limit);
        if before != (self.history.undo_depth(), self.history.redo_depth()) {
            self.touch();
        }
    }

    /// Dispatch a view command to the matching operation
    pub fn apply(&mut self, command: &CanvasCommand) -> bool {
        match command {
            CanvasCommand::Select(id) => self.select_item(*id),
            CanvasCommand::Deselect => self.deselect_item(),
            CanvasCommand::MoveSelected(delta) => self.update_selected_position(*delta),
            CanvasCommand::CommitMove => self.commit_selected_position(),
            CanvasCommand::SetText(text) => self.update_selected_text(text.clone()),
            CanvasCommand::IncreaseFontSize => self.increase_font_size(),
            CanvasCommand::DecreaseFontSize => self.decrease_font_size(),
            CanvasCommand::ToggleBold => self.toggle_bold(),
            CanvasCommand::ToggleItalic => self.toggle_italic(),
            CanvasCommand::ToggleUnderline => self.toggle_underline(),
            CanvasCommand::SetFontFamily(family) => self.set_font_family(*family),
            CanvasCommand::AddItem => self.add_new_item(),
            CanvasCommand::Undo => self.undo(),
            CanvasCommand::Redo => self.redo(),
        }
    }

    // ------------------------------------------------------------------
    // Selection (never recorded in history)
    // ------------------------------------------------------------------

    /// Make `id` the selection, returning any previous selection to the items
    pub fn select_item(&mut self, id: ItemId) -> bool {
        if !self.document.take_selection(id) {
            trace!("select_item: {} is not a placed item", id);
            return false;
        }
        self.drag_origin = None;
        debug!("Selected item {}", id);
        self.touch();
        true
    }

    /// Return the selection to the end of the item collection
    pub fn deselect_item(&mut self) -> bool {
        let Some(id) = self.document.release_selection() else {
            return false;
        };
        self.drag_origin = None;
        debug!("Deselected item {}", id);
        self.touch();
        true
    }

    // ------------------------------------------------------------------
    // Unrecorded edits
    // ------------------------------------------------------------------

    /// Accumulate a drag delta onto the selected item
    pub fn update_selected_position(&mut self, delta: Vec2) -> bool {
        if !self.document.has_selection() {
            return false;
        }
        if self.drag_origin.is_none() {
            self.drag_origin = Some(self.document.snapshot());
        }
        self.document.map_selected(|item| item.translated(delta));
        self.touch();
        true
    }

    /// Replace the selected item's text
    pub fn update_selected_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.document.selected().is_some_and(|item| item.text == text) {
            return false;
        }
        if !self.document.map_selected(|item| item.with_text(text)) {
            return false;
        }
        self.touch();
        true
    }

    // ------------------------------------------------------------------
    // Recorded edits
    // ------------------------------------------------------------------

    /// Finish a drag gesture, recording it as a single history entry
    pub fn commit_selected_position(&mut self) -> bool {
        let origin = self.drag_origin.take();
        if !self.document.has_selection() {
            return false;
        }
        let snapshot = match self.drag_commit_mode {
            DragCommitMode::PreDrag => origin.unwrap_or_else(|| self.document.snapshot()),
            DragCommitMode::PostDrag => self.document.snapshot(),
        };
        self.history.record(snapshot);
        debug!(
            "Committed drag ({:?}), undo depth {}",
            self.drag_commit_mode,
            self.history.undo_depth()
        );
        self.touch();
        true
    }

    pub fn increase_font_size(&mut self) -> bool {
        self.edit_selected("increase font size", |item| item.resized(1))
    }

    /// Shrink the selected font by one, never below the minimum.
    ///
    /// Recorded even when the size is already at the floor.
    pub fn decrease_font_size(&mut self) -> bool {
        self.edit_selected("decrease font size", |item| item.resized(-1))
    }

    pub fn toggle_bold(&mut self) -> bool {
        self.edit_selected("toggle bold", |item| TextItem {
            is_bold: !item.is_bold,
            ..item.clone()
        })
    }

    pub fn toggle_italic(&mut self) -> bool {
        self.edit_selected("toggle italic", |item| TextItem {
            is_italic: !item.is_italic,
            ..item.clone()
        })
    }

    pub fn toggle_underline(&mut self) -> bool {
        self.edit_selected("toggle underline", |item| TextItem {
            is_underline: !item.is_underline,
            ..item.clone()
        })
    }

    /// Change the selected item's font family; same-family requests are ignored
    pub fn set_font_family(&mut self, family: FontFamily) -> bool {
        if self
            .document
            .selected()
            .is_none_or(|item| item.font_family == family)
        {
            return false;
        }
        self.edit_selected("set font family", |item| item.with_font_family(family))
    }

    /// Create a default item and select it, releasing any current selection
    pub fn add_new_item(&mut self) -> bool {
        self.record();
        let id = self.allocate_id();
        self.document
            .insert_selected(TextItem::new(id, self.default_font_family));
        info!("Added item {}", id);
        self.touch();
        true
    }

    // ------------------------------------------------------------------
    // History navigation
    // ------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(self.document.snapshot()) else {
            return false;
        };
        let item_count = previous.item_count();
        self.document.restore(previous);
        self.drag_origin = None;
        debug!(
            "Undo: restored {} items, undo depth {}, redo depth {}",
            item_count,
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        self.touch();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(self.document.snapshot()) else {
            return false;
        };
        let item_count = next.item_count();
        self.document.restore(next);
        self.drag_origin = None;
        debug!(
            "Redo: restored {} items, undo depth {}, redo depth {}",
            item_count,
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        self.touch();
        true
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Record the current state, then replace the selected item
    fn edit_selected(&mut self, name: &str, f: impl FnOnce(&TextItem) -> TextItem) -> bool {
        if !self.document.has_selection() {
            trace!("{}: nothing selected", name);
            return false;
        }
        self.record();
        self.document.map_selected(f);
        trace!("{}: undo depth {}", name, self.history.undo_depth());
        self.touch();
        true
    }

    fn record(&mut self) {
        self.drag_origin = None;
        self.history.record(self.document.snapshot());
    }

    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
