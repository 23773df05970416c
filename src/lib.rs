//! ide-site: static landing page generator for IDE Indonesia events
//!
//! Events are markdown files with front-matter in a content directory;
//! site copy lives in a small JSON settings file. A build loads both and
//! renders a single static `index.html`.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Optional project configuration file, relative to the base directory
pub const CONFIG_FILE: &str = "site.yml";

/// The main site application
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Event content directory
    pub content_dir: PathBuf,
    /// Settings JSON file
    pub settings_path: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `site.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let settings_path = base_dir.join(&config.settings_file);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            settings_path,
            public_dir,
        }
    }

    /// Path of the optional configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Load all events, newest first
    pub fn events(&self) -> Result<Vec<content::EventRecord>> {
        let loader = content::EventLoader::new(&self.config);
        Ok(loader.list_events(&self.content_dir)?)
    }

    /// Load site settings, falling back to the built-in defaults
    pub fn settings(&self) -> config::SiteSettings {
        config::load_settings(&self.settings_path)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
