//! Keyboard mapping for the terminal input.

/// Editor action bound to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the buffer.
    Submit,
    /// Recall an older history line.
    HistoryUp,
    /// Recall a newer history line.
    HistoryDown,
    /// Accept the selected suggestion.
    Complete,
    /// Move the suggestion highlight forward.
    NextSuggestion,
    /// Move the suggestion highlight backward.
    PreviousSuggestion,
    /// Hide suggestions.
    Dismiss,
    /// Clear the scrollback.
    ClearScreen,
}

impl KeyAction {
    /// Returns whether the browser default for the key must be suppressed.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Submit | Self::Dismiss)
    }
}

/// Maps a `KeyboardEvent.key` value plus modifiers to an action.
///
/// While suggestions are open, Ctrl+N / Ctrl+P move the highlight.
pub fn key_action(key: &str, ctrl: bool, shift: bool) -> Option<KeyAction> {
    match key {
        "Enter" => Some(KeyAction::Submit),
        "ArrowUp" => Some(KeyAction::HistoryUp),
        "ArrowDown" => Some(KeyAction::HistoryDown),
        "Tab" if shift => Some(KeyAction::PreviousSuggestion),
        "Tab" => Some(KeyAction::Complete),
        "Escape" => Some(KeyAction::Dismiss),
        "l" | "L" if ctrl => Some(KeyAction::ClearScreen),
        "n" | "N" if ctrl => Some(KeyAction::NextSuggestion),
        "p" | "P" if ctrl => Some(KeyAction::PreviousSuggestion),
        _ => None,
    }
}
