//! Generator module - renders the landing page into the public directory

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::config::SiteSettings;
use crate::content::EventRecord;
use crate::helpers::{date_xml, display_date, url_for};
use crate::templates::{EventCard, NavData, SettingsData, TemplateRenderer};
use crate::Site;

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Write `index.html` for the given events and settings, returning its path
    pub fn generate(&self, events: &[EventRecord], settings: &SiteSettings) -> Result<PathBuf> {
        fs::create_dir_all(&self.site.public_dir)?;

        let html = self.render_index(events, settings)?;
        let output_path = self.site.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(output_path)
    }

    /// Render the landing page to a string
    pub fn render_index(&self, events: &[EventRecord], settings: &SiteSettings) -> Result<String> {
        let mut context = Context::new();
        context.insert("settings", &build_settings_data(settings));
        context.insert("nav", &self.build_nav_data());
        context.insert("events", &self.build_event_cards(events));

        self.renderer.render("index.html", &context)
    }

    fn build_nav_data(&self) -> NavData {
        let config = &self.site.config;
        NavData {
            home: url_for(config, "/"),
            events: url_for(config, "#events"),
            admin: url_for(config, &config.admin_path),
        }
    }

    /// Map events to cards, keeping their order
    fn build_event_cards(&self, events: &[EventRecord]) -> Vec<EventCard> {
        let date_format = &self.site.config.date_format;

        events
            .iter()
            .map(|e| EventCard {
                slug: e.slug.clone(),
                title: e.title.clone().unwrap_or_default(),
                description: e.description.clone().unwrap_or_default(),
                location: e.location.clone().unwrap_or_default(),
                thumbnail: e.thumbnail.clone().filter(|t| !t.trim().is_empty()),
                date: display_date(e.date.as_deref(), date_format),
                date_iso: e.timestamp().map(|t| date_xml(&t)),
            })
            .collect()
    }
}

fn build_settings_data(settings: &SiteSettings) -> SettingsData {
    SettingsData {
        site_title: settings.site_title.clone().unwrap_or_default(),
        hero_headline: settings.hero_headline.clone().unwrap_or_default(),
        hero_subtext: settings.hero_subtext.clone().unwrap_or_default(),
    }
}
