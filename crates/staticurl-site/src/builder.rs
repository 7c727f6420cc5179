//! Static site builder.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assets::FRONT_PAGE;
use crate::record::{scan, UrlRecord};
use crate::templates::TemplateEngine;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding one URL file per short code
    pub urls_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of redirect pages generated
    pub pages: usize,

    /// Whether the front page was written
    pub front_page: bool,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build. All of them abort the build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to parse template: {0}")]
    TemplateError(#[source] minijinja::Error),

    #[error("Failed to render page for code {code}: {source}")]
    RenderError {
        code: String,
        source: minijinja::Error,
    },

    #[error("Cannot read URLs directory {}: {source}", .path.display())]
    ReadDirError {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Cannot read URLs directory {}: not a directory", .0.display())]
    NotADirError(PathBuf),

    #[error("URLs directory is empty: {}", .0.display())]
    EmptyDirError(PathBuf),

    #[error("Failed to read file {}: {source}", .path.display())]
    ReadError { path: PathBuf, source: io::Error },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirError { path: PathBuf, source: io::Error },

    #[error("Failed to write output {}: {source}", .path.display())]
    WriteError { path: PathBuf, source: io::Error },
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a builder with the embedded redirect template.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let templates = TemplateEngine::new().map_err(BuildError::TemplateError)?;

        Ok(Self::with_templates(config, templates))
    }

    /// Create a builder with a custom template engine.
    pub fn with_templates(config: BuildConfig, templates: TemplateEngine) -> Self {
        Self { config, templates }
    }

    /// Build the static site.
    ///
    /// Pages are written one at a time in directory order. Pages written
    /// before an error stay on disk.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let mut pages = 0;

        for record in scan(&self.config.urls_dir)? {
            let record = record?;
            let html = self
                .templates
                .render(&record)
                .map_err(|source| BuildError::RenderError {
                    code: record.code.clone(),
                    source,
                })?;
            let path = write_page(&self.config.output_dir, &record, &html)?;

            tracing::debug!("{} -> {}", record.code, path.display());
            pages += 1;
        }

        let front_page = write_front_page(&self.config.output_dir);

        Ok(BuildResult {
            pages,
            front_page,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }
}

/// Write a rendered page to `<output_dir>/<code>/index.html`, replacing any
/// previous copy. Returns the path written.
pub fn write_page(
    output_dir: &Path,
    record: &UrlRecord,
    html: &str,
) -> Result<PathBuf, BuildError> {
    let page_dir = output_dir.join(&record.code);
    create_dir(output_dir)?;
    create_dir(&page_dir)?;

    let path = page_dir.join("index.html");
    let write_error = |source| BuildError::WriteError {
        path: path.clone(),
        source,
    };

    let mut file = File::create(&path).map_err(write_error)?;
    file.write_all(html.as_bytes()).map_err(write_error)?;

    Ok(path)
}

/// Write the front page to `<output_dir>/index.html`.
///
/// Failures only log a warning since the redirect pages are still usable.
pub fn write_front_page(output_dir: &Path) -> bool {
    let path = output_dir.join("index.html");

    let result = fs::create_dir_all(output_dir).and_then(|_| fs::write(&path, FRONT_PAGE));
    if let Err(e) = result {
        tracing::warn!("Failed to create front page at {}: {}", path.display(), e);
        return false;
    }

    true
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::CreateDirError {
        path: path.to_path_buf(),
        source,
    })
}
