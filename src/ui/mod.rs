mod canvas_panel;
mod notifications;
mod settings_dialog;
mod shortcuts;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::canvas::CanvasSet;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<canvas_panel::CanvasGestureState>()
            .init_resource::<settings_dialog::SettingsDialogState>()
            // Shortcuts feed the engine in the same frame
            .add_systems(
                Update,
                shortcuts::handle_canvas_shortcuts.before(CanvasSet::Apply),
            )
            // Top panels must render before the central canvas so it fills
            // the remaining space
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    toolbar::style_bar_ui,
                    canvas_panel::canvas_panel_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    settings_dialog::settings_dialog_ui,
                    notifications::config_reset_notification_ui,
                )
                    .after(canvas_panel::canvas_panel_ui),
            );
    }
}
