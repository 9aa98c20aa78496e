//! Browser-backed collaborators for the terminal commands.

use std::{rc::Rc, time::Duration};

use leptos::{logging, set_timeout, window, RwSignal, SignalGetUntracked, SignalSet};
use portfolio_host::{
    unix_time_ms_now, MemoryPortfolioSource, NavigationService, NoopPortfolioSource,
    PortfolioSource, ResumeFuture, ResumeService, ThemeFuture, ThemeService,
};
use terminal_runtime::ShellServices;
use terminal_shell_contract::{EffectSink, ShellEffect, Theme};

/// Theme service backed by a signal the page wrapper reads for its class.
#[derive(Clone, Copy)]
pub(crate) struct SignalThemeService {
    theme: RwSignal<Theme>,
}

impl ThemeService for SignalThemeService {
    fn current_theme(&self) -> Theme {
        self.theme.get_untracked()
    }

    fn set_theme<'a>(&'a self, theme: Theme) -> ThemeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.theme.set(theme);
            Ok(())
        })
    }
}

/// Opens the resume in a new tab.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserResumeService;

impl ResumeService for BrowserResumeService {
    fn download<'a>(&'a self, url: &'a str) -> ResumeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            match window().open_with_url_and_target(url, "_blank") {
                Ok(Some(_)) => Ok(()),
                Ok(None) => Err("the browser blocked the new tab".to_string()),
                Err(err) => Err(format!("{err:?}")),
            }
        })
    }
}

/// Schedules client-side route changes through the router.
#[derive(Clone)]
pub(crate) struct RouterNavigationService {
    navigate: Rc<dyn Fn(&str)>,
}

impl NavigationService for RouterNavigationService {
    fn navigate(&self, path: &str, delay_ms: u32) -> Result<(), String> {
        let navigate = self.navigate.clone();
        let path = path.to_string();
        set_timeout(
            move || navigate(&path),
            Duration::from_millis(u64::from(delay_ms)),
        );
        Ok(())
    }
}

/// Routes shell notifications to page-level signals.
#[derive(Clone, Copy)]
pub(crate) struct PageEffectSink {
    matrix: RwSignal<bool>,
}

impl EffectSink for PageEffectSink {
    fn notify(&self, effect: ShellEffect) {
        match effect {
            ShellEffect::MatrixRain { duration_ms } => {
                let matrix = self.matrix;
                matrix.set(true);
                set_timeout(
                    move || matrix.set(false),
                    Duration::from_millis(u64::from(duration_ms)),
                );
            }
            ShellEffect::ThemeChanged { theme } => logging::log!("theme changed to {theme}"),
            ShellEffect::Navigate { path, delay_ms } => {
                logging::log!("navigating to {path} in {delay_ms}ms")
            }
        }
    }
}

fn portfolio_source() -> Rc<dyn PortfolioSource> {
    match MemoryPortfolioSource::embedded(unix_time_ms_now()) {
        Ok(source) => Rc::new(source),
        Err(err) => {
            logging::warn!("portfolio data failed to load: {err}");
            Rc::new(NoopPortfolioSource)
        }
    }
}

/// Assembles the browser service bundle.
pub(crate) fn browser_services(
    theme: RwSignal<Theme>,
    matrix: RwSignal<bool>,
    navigate: Rc<dyn Fn(&str)>,
) -> ShellServices {
    ShellServices {
        portfolio: portfolio_source(),
        theme: Rc::new(SignalThemeService { theme }),
        resume: Rc::new(BrowserResumeService),
        navigation: Rc::new(RouterNavigationService { navigate }),
        effects: Rc::new(PageEffectSink { matrix }),
    }
}
