use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use terminal_app::TerminalApp;
use terminal_runtime::{build_shell, ShellConfig};
use terminal_shell_contract::Theme;

use crate::browser::browser_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Alex Rivera | Terminal" />
        <Meta name="description" content="An interactive command-line portfolio." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=TerminalEntry />
                    <Route path="/admin" view=AdminPlaceholder />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn TerminalEntry() -> impl IntoView {
    let config = ShellConfig::load_embedded();
    let prompt = config.prompt.clone();
    let theme = create_rw_signal(Theme::default());
    let matrix = create_rw_signal(false);
    let navigate = use_navigate();
    let services = browser_services(
        theme,
        matrix,
        Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
    );

    match build_shell(services, config) {
        Ok(session) => view! {
            <div class=move || format!("terminal-page theme-{}", theme.get().css_id())>
                <Show when=move || matrix.get() fallback=|| ()>
                    <div class="matrix-rain" aria-hidden="true"></div>
                </Show>
                <TerminalApp session=session prompt=prompt />
            </div>
        }
        .into_view(),
        Err(err) => {
            logging::error!("terminal failed to start: {err}");
            view! {
                <section class="terminal-page terminal-unavailable">
                    <p>"The terminal could not start. Please reload the page."</p>
                </section>
            }
            .into_view()
        }
    }
}

#[component]
pub fn AdminPlaceholder() -> impl IntoView {
    view! {
        <section class="admin-placeholder">
            <h1>"Admin"</h1>
            <p>"Content management is not available in this build."</p>
            <A href="/">"Back to the terminal"</A>
        </section>
    }
}
