//! Typed collaborator contracts and in-memory adapters consumed by the terminal commands.
//!
//! This crate is the boundary between the shell and everything it treats as external: portfolio
//! data, the active theme, resume download, and page navigation. Browser adapters live in the
//! `site` crate; the in-memory adapters here back the embedded mock data and the tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod models;
pub mod navigation;
pub mod portfolio;
pub mod resume;
pub mod theme;
pub mod time;

pub use models::{
    Certificate, Experience, PortfolioSnapshot, Profile, Project, Recommendation, Skill,
    SkillGroup, SocialLink,
};
pub use navigation::{MemoryNavigationService, NavigationService};
pub use portfolio::{
    MemoryPortfolioSource, NoopPortfolioSource, PortfolioFuture, PortfolioSource,
    EMBEDDED_PORTFOLIO_JSON,
};
pub use resume::{MemoryResumeService, NoopResumeService, ResumeFuture, ResumeService};
pub use theme::{MemoryThemeService, ThemeFuture, ThemeService};
pub use time::unix_time_ms_now;
