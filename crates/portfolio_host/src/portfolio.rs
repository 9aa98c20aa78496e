//! Read-only portfolio data contracts and adapters.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

use crate::models::{
    Certificate, Experience, PortfolioSnapshot, Profile, Project, Recommendation, SkillGroup,
};

/// Mock portfolio document compiled into the binary.
pub const EMBEDDED_PORTFOLIO_JSON: &str = include_str!("../data/portfolio.json");

/// Object-safe boxed future used by [`PortfolioSource`].
pub type PortfolioFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service exposing portfolio data. Every accessor may fail independently.
pub trait PortfolioSource {
    /// Loads the owner profile.
    fn profile<'a>(&'a self) -> PortfolioFuture<'a, Result<Profile, String>>;

    /// Loads projects in display order.
    fn projects<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Project>, String>>;

    /// Loads skill groups.
    fn skills<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<SkillGroup>, String>>;

    /// Loads positions, newest first.
    fn experience<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Experience>, String>>;

    /// Loads certificates.
    fn certificates<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Certificate>, String>>;

    /// Loads recommendations.
    fn recommendations<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Recommendation>, String>>;

    /// Picks one fun fact at random.
    fn random_fun_fact<'a>(&'a self) -> PortfolioFuture<'a, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Portfolio source for hosts without data; every accessor fails.
pub struct NoopPortfolioSource;

const UNAVAILABLE: &str = "portfolio data unavailable";

impl PortfolioSource for NoopPortfolioSource {
    fn profile<'a>(&'a self) -> PortfolioFuture<'a, Result<Profile, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn projects<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn skills<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<SkillGroup>, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn experience<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Experience>, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn certificates<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Certificate>, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn recommendations<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Recommendation>, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }

    fn random_fun_fact<'a>(&'a self) -> PortfolioFuture<'a, Result<String, String>> {
        Box::pin(async { Err(UNAVAILABLE.to_string()) })
    }
}

#[derive(Debug, Clone)]
/// In-memory portfolio source over a [`PortfolioSnapshot`].
///
/// Fun facts are drawn with a small xorshift generator so tests can pin the sequence with a seed.
pub struct MemoryPortfolioSource {
    snapshot: Rc<PortfolioSnapshot>,
    rng_state: Rc<Cell<u64>>,
}

impl MemoryPortfolioSource {
    /// Wraps `snapshot`, seeding fun-fact selection with `seed`.
    pub fn new(snapshot: PortfolioSnapshot, seed: u64) -> Self {
        Self {
            snapshot: Rc::new(snapshot),
            rng_state: Rc::new(Cell::new(seed | 1)),
        }
    }

    /// Parses a portfolio JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document does not match [`PortfolioSnapshot`].
    pub fn from_json(raw: &str, seed: u64) -> Result<Self, String> {
        let snapshot = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        Ok(Self::new(snapshot, seed))
    }

    /// Loads the embedded mock document.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded document is malformed.
    pub fn embedded(seed: u64) -> Result<Self, String> {
        Self::from_json(EMBEDDED_PORTFOLIO_JSON, seed)
    }

    /// Underlying document.
    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    fn next_index(&self, len: usize) -> usize {
        let mut x = self.rng_state.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng_state.set(x);
        (x % len as u64) as usize
    }
}

impl PortfolioSource for MemoryPortfolioSource {
    fn profile<'a>(&'a self) -> PortfolioFuture<'a, Result<Profile, String>> {
        Box::pin(async move { Ok(self.snapshot.profile.clone()) })
    }

    fn projects<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async move { Ok(self.snapshot.projects.clone()) })
    }

    fn skills<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<SkillGroup>, String>> {
        Box::pin(async move { Ok(self.snapshot.skills.clone()) })
    }

    fn experience<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Experience>, String>> {
        Box::pin(async move { Ok(self.snapshot.experience.clone()) })
    }

    fn certificates<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Certificate>, String>> {
        Box::pin(async move { Ok(self.snapshot.certificates.clone()) })
    }

    fn recommendations<'a>(&'a self) -> PortfolioFuture<'a, Result<Vec<Recommendation>, String>> {
        Box::pin(async move { Ok(self.snapshot.recommendations.clone()) })
    }

    fn random_fun_fact<'a>(&'a self) -> PortfolioFuture<'a, Result<String, String>> {
        Box::pin(async move {
            let facts = &self.snapshot.fun_facts;
            if facts.is_empty() {
                return Err("no fun facts recorded".to_string());
            }
            Ok(facts[self.next_index(facts.len())].clone())
        })
    }
}
