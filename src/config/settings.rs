//! Site copy settings (content/settings/global.json)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::optional_scalar;

pub const DEFAULT_SITE_TITLE: &str = "IDE Indonesia";
pub const DEFAULT_HERO_HEADLINE: &str = "Inspire • Develop • Engage";
pub const DEFAULT_HERO_SUBTEXT: &str = "A community of Monash Business School's PhD students fostering academic discourse and knowledge exchange focused on Indonesia.";

/// Display strings for the landing page.
///
/// A parsed file replaces the fallback as a whole: keys missing from the
/// file stay `None` rather than being filled in from the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub site_title: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub hero_headline: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub hero_subtext: Option<String>,
}

impl SiteSettings {
    /// Settings used when no readable settings file exists
    pub fn fallback() -> Self {
        Self {
            site_title: Some(DEFAULT_SITE_TITLE.to_string()),
            hero_headline: Some(DEFAULT_HERO_HEADLINE.to_string()),
            hero_subtext: Some(DEFAULT_HERO_SUBTEXT.to_string()),
        }
    }

    /// Load settings, substituting [`SiteSettings::fallback`] on any failure.
    /// Never fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Using default settings, could not load {:?}: {}", path, e);
                Self::fallback()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        if !value.is_object() {
            anyhow::bail!("settings must be a JSON object");
        }
        let settings: SiteSettings = serde_json::from_value(value)?;
        Ok(settings)
    }
}

/// Read the settings file at `path`
pub fn load_settings<P: AsRef<Path>>(path: P) -> SiteSettings {
    SiteSettings::load(path)
}
