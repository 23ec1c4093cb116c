//! Centralized color theme for the application.
//!
//! This module provides all colors used by the canvas and the editor UI.
//! Modify values here to change the application's color scheme.

use bevy_egui::egui;

// ============================================================================
// Canvas Colors
// ============================================================================

/// Off-white drawing surface
pub const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(250, 250, 247);

/// Text color for placed items
pub const ITEM_TEXT: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);

/// Light blue outline around the selected item
pub const SELECTION_OUTLINE: egui::Color32 = egui::Color32::from_rgb(51, 153, 255);

/// Very light blue fill behind the selected item
pub const SELECTION_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(10, 30, 51, 26);

/// Hint text shown on an empty canvas
pub const EMPTY_HINT: egui::Color32 = egui::Color32::from_rgb(160, 160, 160);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (style bar)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;
}
