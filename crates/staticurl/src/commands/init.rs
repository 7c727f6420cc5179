//! Scaffold a new staticurl site.

use std::path::Path;

use staticurl_site::init_site;

/// Run the init command.
pub fn run(name: &str) {
    tracing::info!("Initializing {}...", name);

    init_site(Path::new(name));

    tracing::info!("Add one file per short code to {}/urls/", name);
    tracing::info!("Run 'staticurl -b' inside {} to build the site.", name);
}
