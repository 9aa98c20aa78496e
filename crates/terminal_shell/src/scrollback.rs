//! Ordered log of command/output pairs.

use serde::{Deserialize, Serialize};
use terminal_shell_contract::CommandOutput;

/// Default cap on retained entries.
pub const DEFAULT_MAX_ENTRIES: usize = 200;

/// Stable scrollback entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

/// One command/output pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollbackEntry {
    /// Entry identifier.
    pub id: EntryId,
    /// Submitted line; empty for system messages.
    pub command: String,
    /// Current output.
    pub output: CommandOutput,
    pending: bool,
}

impl ScrollbackEntry {
    /// Returns whether the entry still shows the provisional placeholder.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns whether the entry was produced by the shell rather than a submission.
    pub fn is_system(&self) -> bool {
        self.command.is_empty()
    }
}

/// Append-mostly entry log.
///
/// Entries are appended on submission and settled in place exactly once. The oldest settled
/// entries are dropped once the log grows past its cap; a pending entry is never evicted.
#[derive(Debug, Clone)]
pub struct Scrollback {
    entries: Vec<ScrollbackEntry>,
    next_id: u64,
    max_entries: usize,
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl Scrollback {
    /// Creates an empty log retaining at most `max_entries` entries (at least one).
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[ScrollbackEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a settled system message. A `clear` output empties the log instead.
    pub fn push_system(&mut self, output: CommandOutput) -> Option<EntryId> {
        if output == CommandOutput::Clear {
            self.clear();
            return None;
        }
        Some(self.push(String::new(), output, false))
    }

    /// Appends a provisional entry for `command`.
    pub fn push_provisional(&mut self, command: impl Into<String>) -> EntryId {
        self.push(command.into(), CommandOutput::processing(), true)
    }

    fn push(&mut self, command: String, output: CommandOutput, pending: bool) -> EntryId {
        self.next_id = self.next_id.saturating_add(1);
        let id = EntryId(self.next_id);
        self.entries.push(ScrollbackEntry {
            id,
            command,
            output,
            pending,
        });
        self.trim();
        id
    }

    /// Replaces the provisional output of entry `id`.
    ///
    /// Returns `false` when the entry is gone or was already settled. A `clear` output empties
    /// the whole log.
    pub fn settle(&mut self, id: EntryId, output: CommandOutput) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id && entry.pending)
        else {
            return false;
        };
        if output == CommandOutput::Clear {
            self.clear();
            return true;
        }
        entry.output = output;
        entry.pending = false;
        true
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn trim(&mut self) {
        let mut overflow = self.entries.len().saturating_sub(self.max_entries);
        if overflow == 0 {
            return;
        }
        self.entries.retain(|entry| {
            if overflow > 0 && !entry.pending {
                overflow -= 1;
                false
            } else {
                true
            }
        });
    }
}

/// Presentation flags for the scrollback panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollbackDisplay {
    collapsed: bool,
    observed_len: usize,
}

impl ScrollbackDisplay {
    /// Returns whether the panel is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flips the collapsed flag.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Expands the panel.
    pub fn expand(&mut self) {
        self.collapsed = false;
    }

    /// Records the current entry count; returns `true` when it changed and the view should
    /// scroll to the newest entry.
    pub fn observe_len(&mut self, len: usize) -> bool {
        let changed = self.observed_len != len;
        self.observed_len = len;
        changed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use terminal_shell_contract::PROCESSING_PLACEHOLDER;

    use super::*;

    #[test]
    fn provisional_entry_settles_once_in_place() {
        let mut log = Scrollback::default();
        log.push_system(CommandOutput::text("welcome"));
        let id = log.push_provisional("about");
        log.push_system(CommandOutput::info("notice"));
        assert_eq!(log.entries()[1].output.as_text(), Some(PROCESSING_PLACEHOLDER));
        assert!(log.entries()[1].is_pending());

        assert!(log.settle(id, CommandOutput::success("done")));
        assert!(!log.settle(id, CommandOutput::error("again")));

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[1].output, CommandOutput::success("done"));
        assert!(log.entries().iter().all(|entry| !entry.is_pending()));
    }

    #[test]
    fn clear_output_empties_the_log() {
        let mut log = Scrollback::default();
        log.push_system(CommandOutput::text("one"));
        let id = log.push_provisional("reset");
        assert!(log.settle(id, CommandOutput::Clear));
        assert!(log.is_empty());

        log.push_system(CommandOutput::text("two"));
        assert_eq!(log.push_system(CommandOutput::Clear), None);
        assert!(log.is_empty());
    }

    #[test]
    fn oldest_entries_are_trimmed() {
        let mut log = Scrollback::new(2);
        log.push_system(CommandOutput::text("a"));
        log.push_system(CommandOutput::text("b"));
        let id = log.push_provisional("c");
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].output, CommandOutput::text("b"));
        assert!(log.settle(id, CommandOutput::text("c")));
    }

    #[test]
    fn trimming_skips_the_pending_entry() {
        let mut log = Scrollback::new(2);
        let id = log.push_provisional("slow");
        log.push_system(CommandOutput::text("a"));
        log.push_system(CommandOutput::text("b"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].id, id);
        assert_eq!(log.entries()[1].output, CommandOutput::text("b"));

        assert!(log.settle(id, CommandOutput::text("done")));
        log.push_system(CommandOutput::text("c"));
        let outputs: Vec<_> = log.entries().iter().map(|entry| entry.output.clone()).collect();
        assert_eq!(outputs, vec![CommandOutput::text("b"), CommandOutput::text("c")]);
    }

    #[test]
    fn settling_a_cleared_entry_is_ignored() {
        let mut log = Scrollback::default();
        let id = log.push_provisional("slow");
        log.clear();
        assert!(!log.settle(id, CommandOutput::text("late")));
        assert!(log.is_empty());
    }

    #[test]
    fn display_reports_length_changes() {
        let mut display = ScrollbackDisplay::default();
        assert!(!display.observe_len(0));
        assert!(display.observe_len(1));
        assert!(!display.observe_len(1));
        display.toggle();
        assert!(display.is_collapsed());
        display.expand();
        assert!(!display.is_collapsed());
    }
}
