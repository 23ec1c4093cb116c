//! Placed text items and their style attributes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_ITEM_POSITION, DEFAULT_ITEM_TEXT, MIN_FONT_SIZE};

/// Stable identifier assigned to an item when it is created.
///
/// Items with identical content stay distinguishable through their id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Font family used to render an item.
///
/// Actual glyph selection is left to the host text renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// System default family
    #[default]
    Default,
    SansSerif,
    Serif,
    Monospace,
    Cursive,
}

impl FontFamily {
    /// Get all font families in display order
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Default,
            FontFamily::SansSerif,
            FontFamily::Serif,
            FontFamily::Monospace,
            FontFamily::Cursive,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::Default => "Default",
            FontFamily::SansSerif => "Sans Serif",
            FontFamily::Serif => "Serif",
            FontFamily::Monospace => "Monospace",
            FontFamily::Cursive => "Cursive",
        }
    }
}

/// A text element placed on the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub id: ItemId,
    pub text: String,
    /// Canvas-space offset from the top-left corner; may be negative or off-screen
    pub position: Vec2,
    pub font_size: u32,
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underline: bool,
    pub font_family: FontFamily,
}

impl TextItem {
    /// Create an item with the default text, position and size
    pub fn new(id: ItemId, font_family: FontFamily) -> Self {
        Self {
            id,
            text: DEFAULT_ITEM_TEXT.to_string(),
            position: DEFAULT_ITEM_POSITION,
            font_size: DEFAULT_FONT_SIZE,
            is_bold: false,
            is_italic: false,
            is_underline: false,
            font_family,
        }
    }

    /// Compare everything except the id.
    pub fn same_content(&self, other: &TextItem) -> bool {
        self.text == other.text
            && self.position == other.position
            && self.font_size == other.font_size
            && self.is_bold == other.is_bold
            && self.is_italic == other.is_italic
            && self.is_underline == other.is_underline
            && self.font_family == other.font_family
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            position: self.position + delta,
            ..self.clone()
        }
    }

    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }

    /// Change the font size by `step`, never going below the minimum
    pub fn resized(&self, step: i64) -> Self {
        let size = (i64::from(self.font_size) + step).max(i64::from(MIN_FONT_SIZE));
        Self {
            font_size: u32::try_from(size).unwrap_or(u32::MAX),
            ..self.clone()
        }
    }

    pub fn with_font_family(&self, font_family: FontFamily) -> Self {
        Self {
            font_family,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = TextItem::new(ItemId(1), FontFamily::Default);
        assert_eq!(item.text, "hello");
        assert_eq!(item.position, Vec2::new(100.0, 100.0));
        assert_eq!(item.font_size, 16);
        assert!(!item.is_bold && !item.is_italic && !item.is_underline);
        assert_eq!(item.font_family, FontFamily::Default);
    }

    #[test]
    fn test_same_content_ignores_id() {
        let a = TextItem::new(ItemId(1), FontFamily::Serif);
        let b = TextItem::new(ItemId(2), FontFamily::Serif);
        assert!(a.same_content(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_resized_floors_at_minimum() {
        let item = TextItem {
            font_size: 1,
            ..TextItem::new(ItemId(1), FontFamily::Default)
        };
        assert_eq!(item.resized(-1).font_size, 1);
        assert_eq!(item.resized(-5).font_size, 1);
        assert_eq!(item.resized(1).font_size, 2);
    }

    #[test]
    fn test_translated_accumulates() {
        let item = TextItem::new(ItemId(1), FontFamily::Default);
        let moved = item.translated(Vec2::new(-150.0, 5.5)).translated(Vec2::new(0.0, 0.5));
        assert_eq!(moved.position, Vec2::new(-50.0, 106.0));
        assert_eq!(moved.text, item.text);
    }

    #[test]
    fn test_font_family_display_names_unique() {
        let names: Vec<_> = FontFamily::all().iter().map(|f| f.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }
}
