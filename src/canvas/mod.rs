//! Canvas state engine: placed text items, the current selection, and
//! snapshot-based undo/redo.
//!
//! The view layer never mutates state directly. It writes [`CanvasCommand`]
//! messages, and reads the published [`CanvasView`] resource.

mod commands;
mod document;
mod engine;
pub mod history;
mod systems;
mod text_item;
mod view;


pub use commands::{CanvasChanged, CanvasCommand};
pub use engine::{CanvasState, DragCommitMode};
pub use text_item::{FontFamily, ItemId, TextItem};
pub use view::CanvasView;

use bevy::prelude::*;

/// Ordering of the canvas systems within `Update`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanvasSet {
    /// Drain queued commands into the engine
    Apply,
    /// Publish the resulting state for the view
    Publish,
}

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanvasState>()
            .init_resource::<CanvasView>()
            .add_message::<CanvasCommand>()
            .add_message::<CanvasChanged>()
            .configure_sets(Update, (CanvasSet::Apply, CanvasSet::Publish).chain())
            .add_systems(
                Update,
                (
                    systems::apply_canvas_commands
                        .run_if(on_message::<CanvasCommand>)
                        .in_set(CanvasSet::Apply),
                    systems::publish_canvas_view.in_set(CanvasSet::Publish),
                ),
            );
    }
}
