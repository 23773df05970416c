//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL under the configured base path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/admin/") // -> "/ide-indonesia-revamp/admin/"
/// url_for(&config, "#events") // -> "#events"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if path.starts_with('#') || is_external(path) {
        return path.to_string();
    }

    let root = config.base_path.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Whether a link points off-site (scheme or protocol-relative)
pub fn is_external(path: &str) -> bool {
    path.starts_with("//") || path.contains("://") || path.starts_with("mailto:")
}
