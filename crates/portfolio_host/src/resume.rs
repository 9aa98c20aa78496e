//! Resume download host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ResumeService`].
pub type ResumeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that hands the resume document to the visitor.
pub trait ResumeService {
    /// Starts a download (or opens a tab) for the document at `url`.
    fn download<'a>(&'a self, url: &'a str) -> ResumeFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Resume service for hosts that cannot open documents.
pub struct NoopResumeService;

impl ResumeService for NoopResumeService {
    fn download<'a>(&'a self, _url: &'a str) -> ResumeFuture<'a, Result<(), String>> {
        Box::pin(async { Err("resume download is not supported on this host".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Records requested downloads instead of performing them.
pub struct MemoryResumeService {
    requested: Rc<RefCell<Vec<String>>>,
}

impl MemoryResumeService {
    /// URLs requested so far, oldest first.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl ResumeService for MemoryResumeService {
    fn download<'a>(&'a self, url: &'a str) -> ResumeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.requested.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_service_records_urls() {
        let service = MemoryResumeService::default();
        block_on(service.download("/resume.pdf")).expect("download");
        assert_eq!(service.requested(), vec!["/resume.pdf".to_string()]);
    }

    #[test]
    fn noop_service_reports_unsupported() {
        assert!(block_on(NoopResumeService.download("/resume.pdf")).is_err());
    }
}
