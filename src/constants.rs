//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

use bevy::math::Vec2;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Text given to a freshly added item
pub const DEFAULT_ITEM_TEXT: &str = "hello";

/// Canvas-space position of a freshly added item (top-left origin)
pub const DEFAULT_ITEM_POSITION: Vec2 = Vec2::new(100.0, 100.0);

/// Font size of a freshly added item
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Font sizes never drop below this value
pub const MIN_FONT_SIZE: u32 = 1;
