//! Page navigation host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service that moves the visitor to another route.
pub trait NavigationService {
    /// Schedules navigation to `path` after `delay_ms` milliseconds.
    ///
    /// Returns once the navigation is scheduled, not when it happens.
    fn navigate(&self, path: &str, delay_ms: u32) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// Records scheduled navigations as `(path, delay_ms)` pairs.
pub struct MemoryNavigationService {
    scheduled: Rc<RefCell<Vec<(String, u32)>>>,
}

impl MemoryNavigationService {
    /// Navigations scheduled so far, oldest first.
    pub fn scheduled(&self) -> Vec<(String, u32)> {
        self.scheduled.borrow().clone()
    }
}

impl NavigationService for MemoryNavigationService {
    fn navigate(&self, path: &str, delay_ms: u32) -> Result<(), String> {
        self.scheduled
            .borrow_mut()
            .push((path.to_string(), delay_ms));
        Ok(())
    }
}
