use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::{DragCommitMode, FontFamily};
use crate::config::{AppConfig, SetDefaultFontFamilyRequest, SetDragCommitModeRequest};
use crate::theme;

/// State for the settings dialog
#[derive(Resource, Default)]
pub struct SettingsDialogState {
    /// Whether the dialog is open
    pub is_open: bool,
}

fn drag_commit_mode_label(mode: DragCommitMode) -> &'static str {
    match mode {
        DragCommitMode::PreDrag => "Undo returns to position before drag",
        DragCommitMode::PostDrag => "Undo keeps dragged position (legacy)",
    }
}

/// Renders the settings dialog
pub fn settings_dialog_ui(
    mut contexts: EguiContexts,
    mut dialog_state: ResMut<SettingsDialogState>,
    config: Res<AppConfig>,
    mut drag_mode_events: MessageWriter<SetDragCommitModeRequest>,
    mut font_family_events: MessageWriter<SetDefaultFontFamilyRequest>,
) -> Result {
    if !dialog_state.is_open {
        return Ok(());
    }

    let mut should_close = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.group(|ui| {
                ui.label(egui::RichText::new("Dragging").strong());
                ui.add_space(8.0);

                for mode in [DragCommitMode::PreDrag, DragCommitMode::PostDrag] {
                    if ui
                        .radio(config.data.drag_commit_mode == mode, drag_commit_mode_label(mode))
                        .clicked()
                    {
                        drag_mode_events.write(SetDragCommitModeRequest { mode });
                    }
                }
            });

            ui.add_space(12.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("New Items").strong());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Font:");
                    egui::ComboBox::from_id_salt("default_font_family")
                        .selected_text(config.data.default_font_family.display_name())
                        .show_ui(ui, |ui| {
                            for family in FontFamily::all() {
                                let is_selected = config.data.default_font_family == *family;
                                if ui
                                    .selectable_label(is_selected, family.display_name())
                                    .clicked()
                                {
                                    font_family_events
                                        .write(SetDefaultFontFamilyRequest { family: *family });
                                }
                            }
                        });
                });
            });

            ui.add_space(12.0);

            let history = match config.data.history_limit {
                Some(limit) => format!("Undo history keeps the last {} edits", limit),
                None => "Undo history is unlimited".to_string(),
            };
            ui.label(egui::RichText::new(history).color(theme::ui::HINT_TEXT).small());
            ui.label(
                egui::RichText::new(format!("Config file: {}", config.config_path.display()))
                    .color(theme::ui::HINT_TEXT)
                    .small(),
            );

            ui.add_space(12.0);

            if ui.button("Close").clicked() {
                should_close = true;
            }
        });

    if should_close {
        dialog_state.is_open = false;
    }

    Ok(())
}
