//! Built-in landing page template using Tera template engine
//!
//! The template is embedded directly in the binary so a build needs
//! nothing but the content directory.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded landing page
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with the landing templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Event copy comes from an external admin tool, keep it escaped
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("landing/layout.html")),
            ("index.html", include_str!("landing/index.html")),
            (
                "partials/nav.html",
                include_str!("landing/partials/nav.html"),
            ),
            (
                "partials/hero.html",
                include_str!("landing/partials/hero.html"),
            ),
            (
                "partials/event_card.html",
                include_str!("landing/partials/event_card.html"),
            ),
        ])?;

        tera.register_filter("css_url", css_url_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: quote a value for use inside CSS `url(...)` in a
/// double-quoted `style` attribute. The result is safe to mark `| safe`.
fn css_url_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("css_url", "value", String, value);
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\'' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '&' => quoted.push_str("&amp;"),
            '"' => quoted.push_str("%22"),
            '<' => quoted.push_str("%3C"),
            '>' => quoted.push_str("%3E"),
            '\n' | '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    Ok(tera::Value::String(quoted))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SettingsData {
    pub site_title: String,
    pub hero_headline: String,
    pub hero_subtext: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub thumbnail: Option<String>,
    pub date: String,
    pub date_iso: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavData {
    pub home: String,
    pub events: String,
    pub admin: String,
}
