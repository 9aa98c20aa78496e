//! Theme host-service contracts.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

use terminal_shell_contract::Theme;

/// Object-safe boxed future used by [`ThemeService`].
pub type ThemeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service owning the active visual theme.
pub trait ThemeService {
    /// Returns the active theme.
    fn current_theme(&self) -> Theme;

    /// Applies `theme` to the host surface.
    fn set_theme<'a>(&'a self, theme: Theme) -> ThemeFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory theme service; cloned handles share the same slot.
pub struct MemoryThemeService {
    current: Rc<Cell<Theme>>,
}

impl MemoryThemeService {
    /// Creates a service starting at `theme`.
    pub fn new(theme: Theme) -> Self {
        Self {
            current: Rc::new(Cell::new(theme)),
        }
    }
}

impl ThemeService for MemoryThemeService {
    fn current_theme(&self) -> Theme {
        self.current.get()
    }

    fn set_theme<'a>(&'a self, theme: Theme) -> ThemeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.current.set(theme);
            Ok(())
        })
    }
}
