//! Static redirect site generator for staticurl.
//!
//! Turns a directory of one-line URL files into a tree of static redirect
//! pages, one `<output>/<code>/index.html` per file, plus a front page.

pub mod assets;
pub mod builder;
pub mod config;
pub mod project;
pub mod record;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use config::{Config, ConfigError};
pub use project::{init_site, Project};
pub use record::{scan, UrlRecord, UrlRecords};
pub use templates::TemplateEngine;
