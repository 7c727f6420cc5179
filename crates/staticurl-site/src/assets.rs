//! Assets compiled into the binary.

/// Template for a single redirect page. Receives `url` and `code`.
pub const REDIRECT_TEMPLATE: &str = include_str!("../assets/redirect.html");

/// Front page written to `<output>/index.html`.
pub const FRONT_PAGE: &str = include_str!("../assets/front.html");

/// `config.json` written by `init`.
pub const DEFAULT_CONFIG: &str = include_str!("../assets/config.json");
