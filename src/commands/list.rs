//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "event" | "events" => {
            let events = site.events()?;
            println!("Events ({}):", events.len());
            for event in events {
                println!(
                    "  {} - {} [{}]",
                    event.date.as_deref().unwrap_or("(no date)"),
                    event.title.as_deref().unwrap_or("(untitled)"),
                    event.slug
                );
            }
        }
        "settings" => {
            let settings = site.settings();
            println!("Settings:");
            println!("  site_title: {}", settings.site_title.unwrap_or_default());
            println!(
                "  hero_headline: {}",
                settings.hero_headline.unwrap_or_default()
            );
            println!(
                "  hero_subtext: {}",
                settings.hero_subtext.unwrap_or_default()
            );
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: events, settings",
                content_type
            );
        }
    }

    Ok(())
}
