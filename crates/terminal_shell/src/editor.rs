//! Input buffer, history walk, and prefix suggestions.

use serde::{Deserialize, Serialize};

use crate::registry::CommandRegistry;

/// Editor state observed by the terminal UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    /// Current input text.
    pub buffer: String,
    /// History offset from the newest entry (`0` = most recent), `None` when not navigating.
    pub history_cursor: Option<usize>,
    /// Matching command names in registry order.
    pub suggestions: Vec<String>,
    /// Index into `suggestions` used by tab completion.
    pub selected_suggestion: usize,
}

/// Key-event interpreter owning the buffer and the session history.
///
/// The editor has no side effects beyond its own state; the session decides whether a submitted
/// line may be dispatched.
#[derive(Debug, Clone, Default)]
pub struct InputEditor {
    state: EditorState,
    history: Vec<String>,
}

impl InputEditor {
    /// Creates an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current editor state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Current input text.
    pub fn buffer(&self) -> &str {
        &self.state.buffer
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Replaces the buffer and recomputes suggestions.
    pub fn on_text_change(&mut self, value: impl Into<String>, registry: &CommandRegistry) {
        self.state.buffer = value.into();
        self.state.selected_suggestion = 0;
        if self.state.buffer.is_empty() {
            self.state.suggestions.clear();
        } else {
            self.state.suggestions = registry.suggestions(&self.state.buffer);
        }
    }

    /// Takes the trimmed buffer as a submitted line and records it in history.
    ///
    /// Returns `None` and leaves the state untouched when the buffer is blank.
    pub fn on_submit(&mut self) -> Option<String> {
        let line = self.state.buffer.trim();
        if line.is_empty() {
            return None;
        }
        let line = line.to_string();
        self.history.push(line.clone());
        self.state = EditorState::default();
        Some(line)
    }

    /// Steps one entry older in history.
    pub fn on_history_up(&mut self) {
        let next = match self.state.history_cursor {
            None if !self.history.is_empty() => 0,
            Some(cursor) if cursor + 1 < self.history.len() => cursor + 1,
            _ => return,
        };
        self.move_history_cursor(Some(next));
    }

    /// Steps one entry newer in history, emptying the buffer when leaving history.
    pub fn on_history_down(&mut self) {
        let next = match self.state.history_cursor {
            None => return,
            Some(0) => None,
            Some(cursor) => Some(cursor - 1),
        };
        self.move_history_cursor(next);
    }

    fn move_history_cursor(&mut self, cursor: Option<usize>) {
        self.state.history_cursor = cursor;
        self.state.buffer = match cursor {
            Some(offset) => self.history[self.history.len() - 1 - offset].clone(),
            None => String::new(),
        };
        self.state.suggestions.clear();
        self.state.selected_suggestion = 0;
    }

    /// Replaces the buffer with the selected suggestion.
    pub fn on_tab_complete(&mut self) {
        let Some(choice) = self
            .state
            .suggestions
            .get(self.state.selected_suggestion)
            .cloned()
        else {
            return;
        };
        self.state.buffer = choice;
        self.state.suggestions.clear();
        self.state.selected_suggestion = 0;
    }

    /// Moves the selection to the next suggestion, wrapping around.
    pub fn select_next_suggestion(&mut self) {
        let count = self.state.suggestions.len();
        if count > 0 {
            self.state.selected_suggestion = (self.state.selected_suggestion + 1) % count;
        }
    }

    /// Moves the selection to the previous suggestion, wrapping around.
    pub fn select_previous_suggestion(&mut self) {
        let count = self.state.suggestions.len();
        if count > 0 {
            self.state.selected_suggestion = (self.state.selected_suggestion + count - 1) % count;
        }
    }

    /// Completes with the suggestion at `index`, as when it is clicked.
    pub fn pick_suggestion(&mut self, index: usize) {
        if index < self.state.suggestions.len() {
            self.state.selected_suggestion = index;
            self.on_tab_complete();
        }
    }

    /// Hides the suggestion list without touching the buffer.
    pub fn dismiss_suggestions(&mut self) {
        self.state.suggestions.clear();
        self.state.selected_suggestion = 0;
    }
}
