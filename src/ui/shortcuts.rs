//! Keyboard shortcuts for canvas commands.
//!
//! - **Ctrl+Z**: Undo
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo
//! - **Ctrl+B / Ctrl+I / Ctrl+U**: Toggle bold / italic / underline
//! - **Ctrl+N**: Add a new text item
//! - **Ctrl+= / Ctrl+-**: Grow / shrink the selected text
//! - **Escape**: Deselect

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::canvas::CanvasCommand;

/// Map a key press plus modifier state to a canvas command
pub fn shortcut_command(key: KeyCode, ctrl: bool, shift: bool) -> Option<CanvasCommand> {
    if !ctrl {
        return (key == KeyCode::Escape).then_some(CanvasCommand::Deselect);
    }

    match key {
        KeyCode::KeyZ if shift => Some(CanvasCommand::Redo),
        KeyCode::KeyZ => Some(CanvasCommand::Undo),
        KeyCode::KeyY => Some(CanvasCommand::Redo),
        KeyCode::KeyB => Some(CanvasCommand::ToggleBold),
        KeyCode::KeyI => Some(CanvasCommand::ToggleItalic),
        KeyCode::KeyU => Some(CanvasCommand::ToggleUnderline),
        KeyCode::KeyN => Some(CanvasCommand::AddItem),
        KeyCode::Equal | KeyCode::NumpadAdd => Some(CanvasCommand::IncreaseFontSize),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(CanvasCommand::DecreaseFontSize),
        _ => None,
    }
}

/// System translating shortcut key presses into canvas commands
pub fn handle_canvas_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut canvas_commands: MessageWriter<CanvasCommand>,
) {
    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for key in keyboard.get_just_pressed() {
        if let Some(command) = shortcut_command(*key, ctrl, shift) {
            canvas_commands.write(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_shortcuts() {
        assert_eq!(shortcut_command(KeyCode::KeyZ, true, false), Some(CanvasCommand::Undo));
        assert_eq!(shortcut_command(KeyCode::KeyZ, true, true), Some(CanvasCommand::Redo));
        assert_eq!(shortcut_command(KeyCode::KeyY, true, false), Some(CanvasCommand::Redo));
    }

    #[test]
    fn test_style_shortcuts() {
        assert_eq!(shortcut_command(KeyCode::KeyB, true, false), Some(CanvasCommand::ToggleBold));
        assert_eq!(shortcut_command(KeyCode::KeyI, true, false), Some(CanvasCommand::ToggleItalic));
        assert_eq!(
            shortcut_command(KeyCode::KeyU, true, false),
            Some(CanvasCommand::ToggleUnderline)
        );
        assert_eq!(
            shortcut_command(KeyCode::Minus, true, false),
            Some(CanvasCommand::DecreaseFontSize)
        );
    }

    #[test]
    fn test_plain_keys_do_nothing_except_escape() {
        assert_eq!(shortcut_command(KeyCode::KeyZ, false, false), None);
        assert_eq!(shortcut_command(KeyCode::KeyB, false, true), None);
        assert_eq!(shortcut_command(KeyCode::Escape, false, false), Some(CanvasCommand::Deselect));
        assert_eq!(shortcut_command(KeyCode::KeyQ, true, false), None);
    }
}
