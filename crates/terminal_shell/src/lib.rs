//! Runtime-agnostic terminal shell engine: command registry, input editor, single-flight
//! dispatcher, and scrollback rendering.
//!
//! The engine owns no UI. A presentation layer feeds key events into a [`ShellSession`], drives
//! the [`PendingCommand`] future returned by a submission on its local executor, and re-renders
//! the scrollback through [`render_scrollback`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod editor;
mod registry;
mod render;
mod scrollback;
mod session;
mod tokenize;

pub use editor::{EditorState, InputEditor};
pub use registry::{Command, CommandContext, CommandHandler, CommandRegistry, RegistryError};
pub use render::{link_segments, render_entry, render_scrollback, RenderedBody, RenderedEntry, Segment};
pub use scrollback::{EntryId, Scrollback, ScrollbackDisplay, ScrollbackEntry, DEFAULT_MAX_ENTRIES};
pub use session::{PendingCommand, SessionOptions, ShellSession, ShellStatus, SubmitOutcome};
pub use tokenize::{parse_line, ParsedLine};
