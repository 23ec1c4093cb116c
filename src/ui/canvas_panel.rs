//! Central canvas: paints text items and turns pointer gestures into commands.
//!
//! - Click an item to select it, click empty canvas to deselect
//! - Drag an item to move it; releasing commits the move to history

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::{CanvasCommand, CanvasView, FontFamily, ItemId, TextItem};
use crate::theme;

/// Pointer gesture in progress on the canvas
#[derive(Resource, Default)]
pub struct CanvasGestureState {
    /// Item being dragged, if the current drag started on one
    pub dragging: Option<ItemId>,
}

/// Map an item font family onto what the egui renderer provides
pub fn egui_font_family(family: FontFamily) -> egui::FontFamily {
    match family {
        FontFamily::Monospace => egui::FontFamily::Monospace,
        FontFamily::Default | FontFamily::SansSerif | FontFamily::Serif | FontFamily::Cursive => {
            egui::FontFamily::Proportional
        }
    }
}

/// Text format for painting an item
pub fn text_format(item: &TextItem) -> egui::TextFormat {
    egui::TextFormat {
        font_id: egui::FontId::new(item.font_size as f32, egui_font_family(item.font_family)),
        color: theme::ITEM_TEXT,
        italics: item.is_italic,
        underline: if item.is_underline {
            egui::Stroke::new((item.font_size as f32 / 14.0).max(1.0), theme::ITEM_TEXT)
        } else {
            egui::Stroke::NONE
        },
        ..Default::default()
    }
}

fn to_egui(v: Vec2) -> egui::Vec2 {
    egui::vec2(v.x, v.y)
}

fn to_bevy(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Paint one item at `origin + item.position`, returning its size
fn paint_item(painter: &egui::Painter, origin: egui::Pos2, item: &TextItem) -> Vec2 {
    let job = egui::text::LayoutJob::single_section(item.text.clone(), text_format(item));
    let galley = painter.layout_job(job);
    let size = galley.size();
    let pos = origin + to_egui(item.position);

    if item.is_bold {
        // egui ships no bold faces, so overstrike with a small offset
        painter.galley(pos + egui::vec2(0.6, 0.0), galley.clone(), theme::ITEM_TEXT);
    }
    painter.galley(pos, galley, theme::ITEM_TEXT);

    to_bevy(size)
}

/// Renders the canvas and handles selection and drag gestures
pub fn canvas_panel_ui(
    mut contexts: EguiContexts,
    view: Res<CanvasView>,
    mut gesture: ResMut<CanvasGestureState>,
    mut canvas_commands: MessageWriter<CanvasCommand>,
) -> Result {
    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&contexts.ctx_mut()?.style()).fill(theme::CANVAS_BACKGROUND))
        .show(contexts.ctx_mut()?, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let origin = response.rect.min;

            let mut sizes: HashMap<ItemId, Vec2> = HashMap::new();
            for item in view.paint_order() {
                sizes.insert(item.id, paint_item(&painter, origin, item));
            }

            if let Some(selected) = view.selected()
                && let Some(size) = sizes.get(&selected.id)
            {
                let rect = egui::Rect::from_min_size(
                    origin + to_egui(selected.position),
                    to_egui(*size),
                )
                .expand(4.0);
                painter.rect_filled(rect, 2.0, theme::SELECTION_FILL);
                painter.rect_stroke(
                    rect,
                    2.0,
                    egui::Stroke::new(1.5, theme::SELECTION_OUTLINE),
                    egui::StrokeKind::Outside,
                );
            }

            if sizes.is_empty() {
                painter.text(
                    response.rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Press \"+ Text\" to add a text item",
                    egui::FontId::proportional(16.0),
                    theme::EMPTY_HINT,
                );
            }

            let hit = |pos: egui::Pos2| {
                view.document().item_at(to_bevy(pos - origin), |item| {
                    sizes.get(&item.id).copied().unwrap_or(Vec2::ZERO)
                })
            };

            if response.drag_started() {
                let target = response.interact_pointer_pos().and_then(hit);
                if let Some(id) = target
                    && view.selected().map(|item| item.id) != Some(id)
                {
                    canvas_commands.write(CanvasCommand::Select(id));
                }
                gesture.dragging = target;
            }

            if response.dragged() && gesture.dragging.is_some() {
                let delta = response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    canvas_commands.write(CanvasCommand::MoveSelected(to_bevy(delta)));
                }
            }

            if response.drag_stopped() && gesture.dragging.take().is_some() {
                canvas_commands.write(CanvasCommand::CommitMove);
            }

            if response.clicked() {
                match response.interact_pointer_pos().and_then(hit) {
                    Some(id) if view.selected().map(|item| item.id) != Some(id) => {
                        canvas_commands.write(CanvasCommand::Select(id));
                    }
                    Some(_) => {}
                    None => {
                        canvas_commands.write(CanvasCommand::Deselect);
                    }
                }
            }
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_maps_to_monospace() {
        assert_eq!(
            egui_font_family(FontFamily::Monospace),
            egui::FontFamily::Monospace
        );
        assert_eq!(
            egui_font_family(FontFamily::Serif),
            egui::FontFamily::Proportional
        );
    }

    #[test]
    fn test_text_format_reflects_item_style() {
        let item = TextItem {
            font_size: 28,
            is_italic: true,
            is_underline: true,
            ..TextItem::new(ItemId(1), FontFamily::Monospace)
        };
        let format = text_format(&item);
        assert_eq!(format.font_id.size, 28.0);
        assert_eq!(format.font_id.family, egui::FontFamily::Monospace);
        assert!(format.italics);
        assert!(format.underline.width >= 1.0);

        let plain = text_format(&TextItem::new(ItemId(2), FontFamily::Default));
        assert!(!plain.italics);
        assert_eq!(plain.underline, egui::Stroke::NONE);
    }
}
