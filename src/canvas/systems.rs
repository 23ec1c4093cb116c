//! Bevy systems that drive the canvas engine and publish its state.

use bevy::prelude::*;

use super::commands::{CanvasChanged, CanvasCommand};
use super::engine::CanvasState;
use super::view::CanvasView;

/// Apply queued view commands to the engine, oldest first
pub fn apply_canvas_commands(
    mut commands: MessageReader<CanvasCommand>,
    mut canvas: ResMut<CanvasState>,
) {
    for command in commands.read() {
        let applied = canvas.apply(command);
        if !applied {
            trace!("Ignored canvas command {:?}", command);
        } else if command.is_recorded() {
            debug!(
                "Recorded {:?} (undo {}, redo {})",
                command,
                canvas.undo_depth(),
                canvas.redo_depth()
            );
        }
    }
}

/// Refresh [`CanvasView`] when the engine revision has moved
pub fn publish_canvas_view(
    canvas: Res<CanvasState>,
    mut view: ResMut<CanvasView>,
    mut changed: MessageWriter<CanvasChanged>,
) {
    if view.revision == canvas.revision() {
        return;
    }
    *view = CanvasView::from_state(&canvas);
    changed.write(CanvasChanged {
        revision: view.revision,
    });
}
