//! Configuration module

mod settings;
mod site;

pub use settings::{load_settings, SiteSettings};
pub use settings::{DEFAULT_HERO_HEADLINE, DEFAULT_HERO_SUBTEXT, DEFAULT_SITE_TITLE};
pub use site::MalformedPolicy;
pub use site::SiteConfig;
