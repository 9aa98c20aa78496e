//! Terminal UI component for the portfolio shell.
//!
//! The component is a thin view over a [`ShellSession`]: key events are forwarded to the session,
//! pending commands are spawned on the Leptos local executor, and every state change bumps a
//! trigger that re-reads the session snapshot.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod keys;
mod panels;

use std::rc::Rc;

use leptos::ev::KeyboardEvent;
use leptos::*;
use terminal_shell::{
    render_scrollback, RenderedBody, RenderedEntry, Segment, ShellSession, SubmitOutcome,
};
use terminal_shell_contract::OutputKind;

pub use keys::{key_action, KeyAction};
pub use panels::structured_panel;

/// CSS classes for a line-oriented output block.
pub fn output_class(kind: OutputKind) -> String {
    format!("terminal-output terminal-output-{}", kind.css_id())
}

fn segment_view(segment: Segment) -> View {
    match segment {
        Segment::Text(text) => view! { <span>{text}</span> }.into_view(),
        Segment::Link(url) => view! {
            <a class="terminal-link" href=url.clone() target="_blank" rel="noopener noreferrer">
                {url}
            </a>
        }
        .into_view(),
    }
}

fn body_view(body: RenderedBody) -> View {
    match body {
        RenderedBody::Preformatted(text) => {
            view! { <pre class="terminal-output terminal-output-ascii">{text}</pre> }.into_view()
        }
        RenderedBody::Lines { kind, lines } => view! {
            <div class=output_class(kind)>
                {lines
                    .into_iter()
                    .map(|segments| {
                        view! {
                            <div class="terminal-line">
                                {segments.into_iter().map(segment_view).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        RenderedBody::Structured(view) => structured_panel(view),
        RenderedBody::Empty => ().into_view(),
    }
}

fn entry_view(entry: RenderedEntry, prompt: String) -> impl IntoView {
    let pending = entry.pending;
    view! {
        <div class="terminal-entry" class:terminal-pending=pending>
            {entry
                .command
                .map(|command| {
                    view! {
                        <div class="terminal-echo">
                            <span class="terminal-prompt">{prompt}</span>
                            " "
                            <span>{command}</span>
                        </div>
                    }
                })}
            {body_view(entry.body)}
        </div>
    }
}

#[component]
/// Interactive terminal bound to one shell session.
pub fn TerminalApp(
    /// Session driven by this view.
    session: ShellSession,
    /// Prompt shown before the input and echoed commands.
    #[prop(into)]
    prompt: String,
) -> impl IntoView {
    let session = store_value(session);
    let changed = create_trigger();
    let screen_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let editor = move || {
        changed.track();
        session.with_value(ShellSession::editor_state)
    };
    let entries = move || {
        changed.track();
        session.with_value(|session| render_scrollback(&session.entries()))
    };
    let collapsed = move || {
        changed.track();
        session.with_value(|session| session.display().is_collapsed())
    };
    let busy = move || {
        changed.track();
        session.with_value(ShellSession::is_busy)
    };

    create_effect(move |_| {
        changed.track();
        let scroll = session.with_value(|session| {
            session.observe_rendered_len(session.entry_count())
        });
        if scroll {
            if let Some(screen) = screen_ref.get() {
                screen.set_scroll_top(screen.scroll_height());
            }
        }
    });

    let focus_input = move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    let submit: Rc<dyn Fn()> = Rc::new(move || {
        let outcome = session.with_value(ShellSession::submit);
        if let SubmitOutcome::Pending(pending) = outcome {
            spawn_local(async move {
                pending.await;
                changed.notify();
            });
        }
        changed.notify();
    });
    let submit_on_enter = submit.clone();
    let submit_on_click = submit;

    let apply = move |action: KeyAction| {
        session.with_value(|session| match action {
            KeyAction::Submit => {}
            KeyAction::HistoryUp => session.on_history_up(),
            KeyAction::HistoryDown => session.on_history_down(),
            KeyAction::Complete => session.on_tab_complete(),
            KeyAction::NextSuggestion => session.select_next_suggestion(),
            KeyAction::PreviousSuggestion => session.select_previous_suggestion(),
            KeyAction::Dismiss => session.dismiss_suggestions(),
            KeyAction::ClearScreen => session.clear_scrollback(),
        });
        changed.notify();
    };

    let suggestion_items = move || {
        editor()
            .suggestions
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let echo_prompt = prompt.clone();

    view! {
        <div class="terminal-app" on:click=move |_| focus_input()>
            <div class="terminal-toolbar">
                <span class="terminal-title">{prompt.clone()}</span>
                <button
                    type="button"
                    class="terminal-toggle"
                    on:click=move |_| {
                        session.with_value(ShellSession::toggle_collapsed);
                        changed.notify();
                    }
                >
                    {move || if collapsed() { "Expand" } else { "Collapse" }}
                </button>
            </div>

            <div
                class="terminal-screen"
                class:terminal-collapsed=collapsed
                role="log"
                aria-live="polite"
                node_ref=screen_ref
            >
                <For
                    each=entries
                    key=|entry| (entry.id, entry.pending)
                    children=move |entry| entry_view(entry, echo_prompt.clone())
                />
            </div>

            <Show when=move || !editor().suggestions.is_empty() fallback=|| ()>
                <div class="terminal-suggestions" role="listbox" aria-label="Suggestions">
                    <For
                        each=suggestion_items
                        key=|(index, name)| (*index, name.clone())
                        children=move |(index, name)| {
                            view! {
                                <button
                                    type="button"
                                    class="terminal-suggestion"
                                    class:selected=move || editor().selected_suggestion == index
                                    on:click=move |_| {
                                        session.with_value(|session| session.pick_suggestion(index));
                                        changed.notify();
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>

            <div class="terminal-input-row">
                <label class="terminal-prompt" for="terminal-input">{prompt}</label>
                <input
                    id="terminal-input"
                    class="terminal-input"
                    type="text"
                    node_ref=input_ref
                    prop:value=move || editor().buffer
                    on:input=move |ev| {
                        session.with_value(|session| session.on_text_change(event_target_value(&ev)));
                        changed.notify();
                    }
                    on:keydown=move |ev: KeyboardEvent| {
                        let Some(action) = key_action(&ev.key(), ev.ctrl_key(), ev.shift_key())
                        else {
                            return;
                        };
                        if action.prevents_default() {
                            ev.prevent_default();
                        }
                        if action == KeyAction::Submit {
                            submit_on_enter();
                        } else {
                            apply(action);
                        }
                    }
                    placeholder="Type 'help' and press Enter"
                    autocomplete="off"
                    autofocus=true
                    spellcheck="false"
                />
                <button
                    type="button"
                    class="terminal-run"
                    on:click=move |_| submit_on_click()
                >
                    "Run"
                </button>
            </div>

            <div class="terminal-statusbar">
                <span>{move || if busy() { "Running command" } else { "Ready" }}</span>
                <span>{move || format!("{} entries", entries().len())}</span>
            </div>
        </div>
    }
}
