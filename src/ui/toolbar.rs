use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::{CanvasCommand, CanvasView, FontFamily};
use crate::theme;

use super::settings_dialog::SettingsDialogState;

/// Main toolbar: add item, undo/redo, and settings
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    view: Res<CanvasView>,
    mut canvas_commands: MessageWriter<CanvasCommand>,
    mut settings: ResMut<SettingsDialogState>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                let add = ui.add(
                    egui::Button::new(egui::RichText::new("+ Text").size(14.0).strong())
                        .min_size(egui::vec2(0.0, 28.0)),
                );
                if add.on_hover_text("Add a new text item (Ctrl+N)").clicked() {
                    canvas_commands.write(CanvasCommand::AddItem);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let undo = ui.add_enabled(
                    view.can_undo,
                    egui::Button::new("Undo").min_size(egui::vec2(0.0, 28.0)),
                );
                if undo.on_hover_text("Ctrl+Z").clicked() {
                    canvas_commands.write(CanvasCommand::Undo);
                }

                let redo = ui.add_enabled(
                    view.can_redo,
                    egui::Button::new("Redo").min_size(egui::vec2(0.0, 28.0)),
                );
                if redo.on_hover_text("Ctrl+Y").clicked() {
                    canvas_commands.write(CanvasCommand::Redo);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        settings.is_open = true;
                    }
                });
            });
        });
    Ok(())
}

/// Secondary bar with text and style controls for the selected item
pub fn style_bar_ui(
    mut contexts: EguiContexts,
    view: Res<CanvasView>,
    mut canvas_commands: MessageWriter<CanvasCommand>,
) -> Result {
    let Some(selected) = view.selected() else {
        return Ok(());
    };

    egui::TopBottomPanel::top("style_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                ui.label(egui::RichText::new("Text:").color(theme::ui::LABEL_TEXT));
                let mut text = selected.text.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .desired_width(240.0)
                        .hint_text("Enter text..."),
                );
                if response.changed() {
                    canvas_commands.write(CanvasCommand::SetText(text));
                }

                ui.add_space(12.0);

                if ui.button("A-").on_hover_text("Smaller (Ctrl+-)").clicked() {
                    canvas_commands.write(CanvasCommand::DecreaseFontSize);
                }
                ui.label(format!("{}", selected.font_size));
                if ui.button("A+").on_hover_text("Larger (Ctrl+=)").clicked() {
                    canvas_commands.write(CanvasCommand::IncreaseFontSize);
                }

                ui.add_space(12.0);

                let style_toggles = [
                    (
                        egui::RichText::new("B").strong(),
                        selected.is_bold,
                        CanvasCommand::ToggleBold,
                        "Bold (Ctrl+B)",
                    ),
                    (
                        egui::RichText::new("I").italics(),
                        selected.is_italic,
                        CanvasCommand::ToggleItalic,
                        "Italic (Ctrl+I)",
                    ),
                    (
                        egui::RichText::new("U").underline(),
                        selected.is_underline,
                        CanvasCommand::ToggleUnderline,
                        "Underline (Ctrl+U)",
                    ),
                ];
                for (label, active, command, hint) in style_toggles {
                    let button = egui::Button::new(label)
                        .min_size(egui::vec2(24.0, 0.0))
                        .selected(active);
                    if ui.add(button).on_hover_text(hint).clicked() {
                        canvas_commands.write(command);
                    }
                }

                ui.add_space(12.0);

                ui.label(egui::RichText::new("Font:").color(theme::ui::LABEL_TEXT));
                egui::ComboBox::from_id_salt("item_font_family")
                    .selected_text(selected.font_family.display_name())
                    .width(110.0)
                    .show_ui(ui, |ui| {
                        for family in FontFamily::all() {
                            let is_selected = selected.font_family == *family;
                            if ui
                                .selectable_label(is_selected, family.display_name())
                                .clicked()
                            {
                                canvas_commands.write(CanvasCommand::SetFontFamily(*family));
                            }
                        }
                    });

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Drag to move, Esc to deselect")
                        .color(theme::ui::HINT_TEXT)
                        .size(11.0),
                );
            });
        });
    Ok(())
}
