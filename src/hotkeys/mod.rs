//! Hotkey system
//!
//! Centralized hotkey management for the operator console.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Timeline Zoom
    // ═══════════════════════════════════════════════════════════════
    /// Zoom in on the lanes (increase pixels per second)
    TimelineZoomIn,
    /// Zoom out on the lanes (decrease pixels per second)
    TimelineZoomOut,

    // ═══════════════════════════════════════════════════════════════
    // Transport
    // ═══════════════════════════════════════════════════════════════
    /// Toggle playback.
    PlayPause,
    /// Rewind to the range start and pause.
    Reset,
    /// Jump to the range end.
    JumpToRangeEnd,
    /// One second back, clamped to the range.
    SkipBackward,
    /// One second forward, clamped to the range.
    SkipForward,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (suppresses every hotkey)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// Modified keys (ctrl, alt, meta) are left to the webview so its own
/// shortcuts keep working.
pub fn handle_hotkey(
    key: &Key,
    ctrl: bool,
    alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }
    if ctrl || alt || meta {
        return HotkeyResult::NoMatch;
    }

    let action = match key {
        // Numpad +/- produce the same characters as the main row
        Key::Character(c) if c == "+" || c == "=" => HotkeyAction::TimelineZoomIn,
        Key::Character(c) if c == "-" => HotkeyAction::TimelineZoomOut,
        Key::Character(c) if c == " " => HotkeyAction::PlayPause,
        Key::Home => HotkeyAction::Reset,
        Key::End => HotkeyAction::JumpToRangeEnd,
        Key::ArrowLeft => HotkeyAction::SkipBackward,
        Key::ArrowRight => HotkeyAction::SkipForward,
        _ => return HotkeyResult::NoMatch,
    };
    HotkeyResult::Action(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> HotkeyResult {
        handle_hotkey(&key, false, false, false, &HotkeyContext::default())
    }

    #[test]
    fn test_plus_zooms_in() {
        let result = press(Key::Character("+".to_string()));
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn)));
    }

    #[test]
    fn test_minus_zooms_out() {
        let result = press(Key::Character("-".to_string()));
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomOut)));
    }

    #[test]
    fn test_space_toggles_playback() {
        let result = press(Key::Character(" ".to_string()));
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_transport_keys() {
        assert!(matches!(press(Key::Home), HotkeyResult::Action(HotkeyAction::Reset)));
        assert!(matches!(press(Key::End), HotkeyResult::Action(HotkeyAction::JumpToRangeEnd)));
        assert!(matches!(press(Key::ArrowLeft), HotkeyResult::Action(HotkeyAction::SkipBackward)));
        assert!(matches!(press(Key::ArrowRight), HotkeyResult::Action(HotkeyAction::SkipForward)));
    }

    #[test]
    fn test_modified_keys_pass_through() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("-".to_string()), true, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
        assert!(matches!(press(Key::Character("q".to_string())), HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext { input_focused: true };
        let result = handle_hotkey(&Key::ArrowLeft, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
