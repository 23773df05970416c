//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// What to do with an event file whose front-matter cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the whole listing
    #[default]
    Fail,
    /// Log a warning and leave the file out
    Skip,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: String,
    pub settings_file: String,
    pub public_dir: String,

    // URL
    pub base_path: String,
    pub admin_path: String,

    // Loading
    pub skip_hidden: bool,
    pub on_malformed: MalformedPolicy,

    // Date format
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content/events".to_string(),
            settings_file: "content/settings/global.json".to_string(),
            public_dir: "out".to_string(),

            base_path: "/ide-indonesia-revamp".to_string(),
            admin_path: "/admin/".to_string(),

            skip_hidden: true,
            on_malformed: MalformedPolicy::Fail,

            date_format: "MMM D, YYYY".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
