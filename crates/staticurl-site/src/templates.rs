//! Template engine for rendering redirect pages.

use minijinja::{context, Environment};

use crate::assets::REDIRECT_TEMPLATE;
use crate::record::UrlRecord;

/// Template name. The `.html` suffix turns on HTML auto-escaping.
const REDIRECT_NAME: &str = "redirect.html";

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the embedded redirect template.
    pub fn new() -> Result<Self, minijinja::Error> {
        Self::with_template(REDIRECT_TEMPLATE)
    }

    /// Create a template engine from a custom redirect template source.
    ///
    /// The template sees two variables, `url` and `code`.
    pub fn with_template(source: &str) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template_owned(REDIRECT_NAME, source.to_string())?;

        Ok(Self { env })
    }

    /// Render the redirect page for a record.
    pub fn render(&self, record: &UrlRecord) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(REDIRECT_NAME)?;

        tmpl.render(context! {
            url => &record.url,
            code => &record.code,
        })
    }
}
