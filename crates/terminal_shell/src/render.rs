//! Pure scrollback renderer producing a UI-agnostic block tree.

use std::sync::OnceLock;

use regex::Regex;
use terminal_shell_contract::{CommandOutput, OutputKind, StructuredView};

use crate::scrollback::{EntryId, ScrollbackEntry};

/// Inline piece of a rendered text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text.
    Text(String),
    /// Actionable link; the text is also the target.
    Link(String),
}

/// Rendered output body.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBody {
    /// Whitespace-preserving block.
    Preformatted(String),
    /// Styled lines with link detection applied.
    Lines {
        /// Output category used for styling.
        kind: OutputKind,
        /// One segment list per source line.
        lines: Vec<Vec<Segment>>,
    },
    /// Handler-built view placed verbatim.
    Structured(StructuredView),
    /// Nothing to draw.
    Empty,
}

/// One rendered scrollback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntry {
    /// Source entry identifier.
    pub id: EntryId,
    /// Echoed command line; `None` for system messages.
    pub command: Option<String>,
    /// Whether the handler has not settled yet.
    pub pending: bool,
    /// Rendered output.
    pub body: RenderedBody,
}

fn url_pattern() -> Option<&'static Regex> {
    static URL: OnceLock<Option<Regex>> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"https?://\S+").ok()).as_ref()
}

/// Splits one line into text and link segments.
pub fn link_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let matches = url_pattern().into_iter().flat_map(|pattern| pattern.find_iter(line));
    for found in matches {
        if found.start() > cursor {
            segments.push(Segment::Text(line[cursor..found.start()].to_string()));
        }
        segments.push(Segment::Link(found.as_str().to_string()));
        cursor = found.end();
    }
    if cursor < line.len() || segments.is_empty() {
        segments.push(Segment::Text(line[cursor..].to_string()));
    }
    segments
}

/// Renders one entry.
pub fn render_entry(entry: &ScrollbackEntry) -> RenderedEntry {
    let body = match &entry.output {
        CommandOutput::Ascii(art) => RenderedBody::Preformatted(art.clone()),
        CommandOutput::Structured(view) => RenderedBody::Structured(view.clone()),
        CommandOutput::Clear => RenderedBody::Empty,
        output => {
            let text = output.as_text().unwrap_or_default();
            RenderedBody::Lines {
                kind: output.kind(),
                lines: text.lines().map(link_segments).collect(),
            }
        }
    };
    RenderedEntry {
        id: entry.id,
        command: (!entry.is_system()).then(|| entry.command.clone()),
        pending: entry.is_pending(),
        body,
    }
}

/// Renders the whole log in order.
pub fn render_scrollback(entries: &[ScrollbackEntry]) -> Vec<RenderedEntry> {
    entries.iter().map(render_entry).collect()
}
