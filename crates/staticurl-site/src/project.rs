//! Project layout: a root directory with an optional `config.json` and a URLs directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::DEFAULT_CONFIG;
use crate::builder::BuildConfig;
use crate::config::{Config, DEFAULT_URLDIR};

/// Name of the project config file.
pub const CONFIG_FILE: &str = "config.json";

/// A loaded project.
#[derive(Debug, Clone)]
pub struct Project {
    /// Project root; config paths are relative to it
    pub root: PathBuf,

    /// Loaded configuration, or the defaults if loading failed
    pub config: Config,
}

impl Project {
    /// Load the project rooted at `root`.
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config = Config::load_or_default(&root.join(CONFIG_FILE));

        Self { root, config }
    }

    /// Resolve the configured directories against the project root.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            urls_dir: self.root.join(&self.config.urldir),
            output_dir: self.root.join(&self.config.output),
        }
    }
}

/// Scaffold a new project at `site`: `<site>/urls/` and `<site>/config.json`.
///
/// Nothing here is fatal. A missing config only means the build uses defaults.
pub fn init_site(site: &Path) {
    let urls_dir = site.join(DEFAULT_URLDIR);
    if let Err(e) = fs::create_dir_all(&urls_dir) {
        tracing::debug!("Could not create {}: {}", urls_dir.display(), e);
    }

    let config_path = site.join(CONFIG_FILE);
    match fs::write(&config_path, DEFAULT_CONFIG) {
        Ok(()) => tracing::info!("Created {}", config_path.display()),
        Err(e) => tracing::warn!(
            "Failed to write {} ({}); project will be using default values",
            config_path.display(),
            e
        ),
    }
}
