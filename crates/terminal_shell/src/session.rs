//! Shell session: editor, single-flight dispatcher, and scrollback behind one shared handle.

use std::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use futures::future::LocalBoxFuture;
use leptos::logging;
use terminal_shell_contract::{CommandOutput, ShellError, ShellErrorCode};

use crate::{
    editor::{EditorState, InputEditor},
    registry::{CommandContext, CommandRegistry},
    scrollback::{EntryId, Scrollback, ScrollbackDisplay, ScrollbackEntry, DEFAULT_MAX_ENTRIES},
    tokenize::parse_line,
};

/// Dispatcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStatus {
    /// Ready to accept a submission.
    Idle,
    /// A handler for the given entry is in flight.
    Busy(EntryId),
}

/// Result of a submission attempt.
pub enum SubmitOutcome {
    /// Nothing happened: blank input or a command already in flight.
    Ignored,
    /// The line was `clear` and the scrollback was emptied synchronously.
    Cleared,
    /// A provisional entry was appended; drive the future to settle it.
    Pending(PendingCommand),
}

impl std::fmt::Debug for SubmitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignored => f.write_str("Ignored"),
            Self::Cleared => f.write_str("Cleared"),
            Self::Pending(pending) => f.debug_tuple("Pending").field(&pending.entry_id).finish(),
        }
    }
}

/// In-flight handler execution.
///
/// The session stays [`ShellStatus::Busy`] until this future completes, so the caller must spawn
/// or await it. Completion settles the provisional entry and returns the session to idle.
#[must_use = "the session stays busy until the pending command is driven to completion"]
pub struct PendingCommand {
    entry_id: EntryId,
    future: LocalBoxFuture<'static, ()>,
}

impl PendingCommand {
    /// Provisional entry this execution settles.
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }
}

impl Future for PendingCommand {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.future.as_mut().poll(cx)
    }
}

/// Session construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Scrollback retention cap.
    pub max_entries: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

struct SessionState {
    editor: InputEditor,
    scrollback: Scrollback,
    display: ScrollbackDisplay,
    status: ShellStatus,
}

/// Shared handle to one interactive shell.
///
/// All state is owned by the session; handlers only receive a [`CommandContext`] snapshot and
/// return data.
#[derive(Clone)]
pub struct ShellSession {
    registry: Rc<CommandRegistry>,
    state: Rc<RefCell<SessionState>>,
}

impl ShellSession {
    /// Creates an idle session over a fully built registry.
    pub fn new(registry: CommandRegistry, options: SessionOptions) -> Self {
        Self {
            registry: Rc::new(registry),
            state: Rc::new(RefCell::new(SessionState {
                editor: InputEditor::new(),
                scrollback: Scrollback::new(options.max_entries),
                display: ScrollbackDisplay::default(),
                status: ShellStatus::Idle,
            })),
        }
    }

    /// Shared command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Current dispatcher state.
    pub fn status(&self) -> ShellStatus {
        self.state.borrow().status
    }

    /// Returns whether a handler is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.status(), ShellStatus::Busy(_))
    }

    /// Snapshot of the editor state.
    pub fn editor_state(&self) -> EditorState {
        self.state.borrow().editor.state().clone()
    }

    /// Snapshot of the submitted lines, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().editor.history().to_vec()
    }

    /// Snapshot of the scrollback entries.
    pub fn entries(&self) -> Vec<ScrollbackEntry> {
        self.state.borrow().scrollback.entries().to_vec()
    }

    /// Number of scrollback entries.
    pub fn entry_count(&self) -> usize {
        self.state.borrow().scrollback.len()
    }

    /// Current scrollback display flags.
    pub fn display(&self) -> ScrollbackDisplay {
        self.state.borrow().display
    }

    /// Flips the scrollback collapse flag.
    pub fn toggle_collapsed(&self) {
        self.state.borrow_mut().display.toggle();
    }

    /// Records the rendered entry count; returns `true` when the view should scroll to the
    /// newest entry.
    pub fn observe_rendered_len(&self, len: usize) -> bool {
        self.state.borrow_mut().display.observe_len(len)
    }

    /// Appends a system message such as the welcome banner.
    pub fn push_system(&self, output: CommandOutput) {
        self.state.borrow_mut().scrollback.push_system(output);
    }

    /// Empties the scrollback without going through the dispatcher.
    ///
    /// Does nothing while a handler is in flight, so its provisional entry still settles.
    pub fn clear_scrollback(&self) {
        let mut state = self.state.borrow_mut();
        if let ShellStatus::Busy(entry_id) = state.status {
            logging::debug_warn!("ignoring clear while entry {} is pending", entry_id.0);
            return;
        }
        state.scrollback.clear();
    }

    /// Replaces the input buffer and recomputes suggestions.
    pub fn on_text_change(&self, value: impl Into<String>) {
        self.state
            .borrow_mut()
            .editor
            .on_text_change(value, &self.registry);
    }

    /// Steps one entry older in history.
    pub fn on_history_up(&self) {
        self.state.borrow_mut().editor.on_history_up();
    }

    /// Steps one entry newer in history.
    pub fn on_history_down(&self) {
        self.state.borrow_mut().editor.on_history_down();
    }

    /// Completes the buffer with the selected suggestion.
    pub fn on_tab_complete(&self) {
        self.state.borrow_mut().editor.on_tab_complete();
    }

    /// Selects the next suggestion.
    pub fn select_next_suggestion(&self) {
        self.state.borrow_mut().editor.select_next_suggestion();
    }

    /// Selects the previous suggestion.
    pub fn select_previous_suggestion(&self) {
        self.state.borrow_mut().editor.select_previous_suggestion();
    }

    /// Completes with the suggestion at `index`.
    pub fn pick_suggestion(&self, index: usize) {
        self.state.borrow_mut().editor.pick_suggestion(index);
    }

    /// Hides the suggestion list.
    pub fn dismiss_suggestions(&self) {
        self.state.borrow_mut().editor.dismiss_suggestions();
    }

    /// Submits the current buffer.
    ///
    /// Blank input and submissions while a handler is in flight are dropped; in the busy case the
    /// buffer is kept so the visitor can submit it later.
    pub fn submit(&self) -> SubmitOutcome {
        let line = {
            let mut state = self.state.borrow_mut();
            if let ShellStatus::Busy(entry_id) = state.status {
                logging::debug_warn!("dropping submission while entry {} is pending", entry_id.0);
                return SubmitOutcome::Ignored;
            }
            match state.editor.on_submit() {
                Some(line) => line,
                None => return SubmitOutcome::Ignored,
            }
        };
        self.dispatch(line)
    }

    /// Types `line` into the editor and submits it, as toolbar shortcuts do.
    pub fn submit_line(&self, line: &str) -> SubmitOutcome {
        if self.is_busy() {
            return SubmitOutcome::Ignored;
        }
        self.on_text_change(line);
        self.submit()
    }

    fn dispatch(&self, line: String) -> SubmitOutcome {
        let Some(parsed) = parse_line(&line) else {
            return SubmitOutcome::Ignored;
        };

        let (entry_id, context) = {
            let mut state = self.state.borrow_mut();
            let entry_id = state.scrollback.push_provisional(line);
            if parsed.name == "clear" {
                state.scrollback.clear();
                return SubmitOutcome::Cleared;
            }
            state.status = ShellStatus::Busy(entry_id);
            let context = CommandContext {
                name: parsed.name,
                args: parsed.args,
                history: state.editor.history().to_vec(),
                commands: self.registry.public_descriptors(),
            };
            (entry_id, context)
        };

        let execution: LocalBoxFuture<'static, Result<CommandOutput, ShellError>> =
            match self.registry.resolve(&context.name) {
                Ok(command) => (command.handler)(context),
                Err(err) => Box::pin(async move { Err(err) }),
            };

        let state = self.state.clone();
        let future = Box::pin(async move {
            let output = match execution.await {
                Ok(output) => output,
                Err(err) => {
                    if matches!(
                        err.code,
                        ShellErrorCode::Execution | ShellErrorCode::Unavailable
                    ) {
                        logging::warn!("command failed: {err}");
                    }
                    err.into_output()
                }
            };
            let mut state = state.borrow_mut();
            state.scrollback.settle(entry_id, output);
            state.status = ShellStatus::Idle;
            state.display.expand();
        });

        SubmitOutcome::Pending(PendingCommand { entry_id, future })
    }
}

#[cfg(test)]
mod tests {
    use futures::{channel::oneshot, executor::block_on};
    use pretty_assertions::assert_eq;
    use terminal_shell_contract::{CommandDescriptor, OutputKind, PROCESSING_PLACEHOLDER};

    use super::*;
    use crate::registry::{tests::echo_command, Command};

    fn session_with(commands: Vec<Command>) -> ShellSession {
        let mut registry = CommandRegistry::new();
        for command in commands {
            registry.register(command).expect("register");
        }
        ShellSession::new(registry, SessionOptions::default())
    }

    fn run(session: &ShellSession, line: &str) -> SubmitOutcome {
        match session.submit_line(line) {
            SubmitOutcome::Pending(pending) => {
                block_on(pending);
                SubmitOutcome::Ignored
            }
            other => other,
        }
    }

    fn last_output(session: &ShellSession) -> CommandOutput {
        session.entries().last().expect("entry").output.clone()
    }

    #[test]
    fn unknown_command_reports_not_found() {
        let session = session_with(vec![echo_command("help")]);
        run(&session, "nosuchcmd");
        assert_eq!(
            last_output(&session),
            CommandOutput::Error(
                "Command not found: nosuchcmd. Type 'help' for available commands.".to_string()
            )
        );
        assert_eq!(session.status(), ShellStatus::Idle);
    }

    #[test]
    fn handler_receives_case_preserved_args() {
        let session = session_with(vec![echo_command("echo")]);
        run(&session, "ECHO Hello World");
        let entries = session.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].command, "ECHO Hello World");
        assert_eq!(entries[0].output, CommandOutput::text("Hello World"));
    }

    #[test]
    fn failing_handler_is_contained() {
        let session = session_with(vec![
            Command::from_fn(CommandDescriptor::new("explode", "fails"), |_| async {
                Err(ShellError::execution("boom"))
            }),
            echo_command("echo"),
        ]);
        run(&session, "explode");
        let output = last_output(&session);
        assert_eq!(output.kind(), OutputKind::Error);
        assert!(output.as_text().expect("text").contains("boom"));
        assert!(!session.is_busy());

        run(&session, "echo still alive");
        assert_eq!(last_output(&session), CommandOutput::text("still alive"));
    }

    #[test]
    fn clear_empties_scrollback_without_calling_handler() {
        let session = session_with(vec![echo_command("echo")]);
        session.push_system(CommandOutput::text("welcome"));
        run(&session, "echo one");
        assert_eq!(session.entry_count(), 2);

        assert!(matches!(session.submit_line("CLEAR"), SubmitOutcome::Cleared));
        assert_eq!(session.entry_count(), 0);
        assert!(!session.is_busy());
        assert_eq!(session.history(), vec!["echo one", "CLEAR"]);
    }

    fn slow_command() -> (oneshot::Sender<CommandOutput>, Command) {
        let (sender, receiver) = oneshot::channel::<CommandOutput>();
        let receiver = Rc::new(RefCell::new(Some(receiver)));
        let command = Command::from_fn(CommandDescriptor::new("slow", "waits"), move |_| {
            let receiver = receiver.borrow_mut().take();
            async move {
                match receiver {
                    Some(receiver) => receiver
                        .await
                        .map_err(|_| ShellError::execution("sender dropped")),
                    None => Err(ShellError::execution("already used")),
                }
            }
        });
        (sender, command)
    }

    #[test]
    fn submissions_while_busy_are_dropped() {
        let (sender, slow) = slow_command();
        let session = session_with(vec![slow, echo_command("echo")]);

        let SubmitOutcome::Pending(pending) = session.submit_line("slow") else {
            panic!("expected pending execution");
        };
        assert!(session.is_busy());
        assert_eq!(session.status(), ShellStatus::Busy(pending.entry_id()));
        assert_eq!(
            last_output(&session).as_text(),
            Some(PROCESSING_PLACEHOLDER)
        );

        session.on_text_change("echo queued");
        assert!(matches!(session.submit(), SubmitOutcome::Ignored));
        assert_eq!(session.editor_state().buffer, "echo queued");
        assert_eq!(session.entry_count(), 1);

        sender
            .send(CommandOutput::success("finished"))
            .expect("send");
        block_on(pending);

        assert!(!session.is_busy());
        assert_eq!(session.entry_count(), 1);
        assert_eq!(last_output(&session), CommandOutput::success("finished"));
        assert!(!session.entries()[0].is_pending());
    }

    #[test]
    fn settlement_expands_collapsed_scrollback() {
        let session = session_with(vec![echo_command("echo")]);
        session.toggle_collapsed();
        assert!(session.display().is_collapsed());
        run(&session, "echo hi");
        assert!(!session.display().is_collapsed());
    }

    #[test]
    fn blank_submit_creates_no_entry() {
        let session = session_with(vec![echo_command("echo")]);
        assert!(matches!(session.submit_line("   "), SubmitOutcome::Ignored));
        assert_eq!(session.entry_count(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn each_submission_appends_exactly_one_entry() {
        let session = session_with(vec![echo_command("echo")]);
        for round in 1..=3 {
            run(&session, &format!("echo {round}"));
            assert_eq!(session.entry_count(), round);
            assert!(session.entries().iter().all(|entry| !entry.is_pending()));
        }
    }

    #[test]
    fn clear_shortcut_waits_for_the_pending_entry() {
        let (sender, slow) = slow_command();
        let session = session_with(vec![slow]);
        session.push_system(CommandOutput::text("welcome"));

        let SubmitOutcome::Pending(pending) = session.submit_line("slow") else {
            panic!("expected pending execution");
        };
        assert!(matches!(session.submit_line("clear"), SubmitOutcome::Ignored));
        session.clear_scrollback();
        assert_eq!(session.entry_count(), 2);

        sender.send(CommandOutput::text("kept")).expect("send");
        block_on(pending);
        assert_eq!(session.entry_count(), 2);
        assert_eq!(last_output(&session), CommandOutput::text("kept"));

        session.clear_scrollback();
        assert_eq!(session.entry_count(), 0);
        assert_eq!(session.history(), vec!["slow"]);
    }

    #[test]
    fn history_walk_and_completion_through_the_session() {
        let session = session_with(vec![echo_command("echo"), echo_command("explain")]);
        run(&session, "echo one");
        run(&session, "echo two");

        session.on_history_up();
        session.on_history_up();
        assert_eq!(session.editor_state().buffer, "echo one");
        session.on_history_down();
        assert_eq!(session.editor_state().buffer, "echo two");
        session.on_history_down();
        assert_eq!(session.editor_state().buffer, "");

        session.on_text_change("e");
        assert_eq!(session.editor_state().suggestions, vec!["echo", "explain"]);
        session.select_next_suggestion();
        session.on_tab_complete();
        assert_eq!(session.editor_state().buffer, "explain");

        session.on_text_change("ex");
        session.on_history_up();
        session.on_tab_complete();
        assert_eq!(session.editor_state().buffer, "echo two");
        assert_eq!(session.history(), vec!["echo one", "echo two"]);
    }
}
