pub const INDEX_HTML: &str = "index.html";
pub const REDIRECT_CONFIG_FILENAME: &str = "redirects.yaml";
pub const DEFAULT_BASE_URL: &str = "/blog/";

/// Top-level directories under the site root that hold generated redirects.
pub const YEAR_DIR_PATTERN: &str = r"^[0-9]{4}$";

pub const TARGET_PLACEHOLDER: &str = "{target}";

// Embedded template content (compile-time inclusion)
pub const REDIRECT_TEMPLATE: &str = include_str!("templates/redirect.html");
