//! Static site build command.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use staticurl_site::{BuildResult, Project, SiteBuilder};

/// Run the build command against the current directory.
pub fn run() -> Result<()> {
    let root = env::current_dir().context("Failed to resolve current directory")?;
    let result = build_project(&root)?;

    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

/// Build the project rooted at `root`.
fn build_project(root: &Path) -> Result<BuildResult> {
    tracing::info!("Building static site...");

    let project = Project::load(root);
    let builder = SiteBuilder::new(project.build_config()).context("Failed to read template")?;

    Ok(builder.build()?)
}
