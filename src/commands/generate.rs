//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::generator::Generator;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    // The two reads are independent; settings never fail
    let events = site.events()?;
    let settings = site.settings();

    tracing::info!("Loaded {} events", events.len());

    let generator = Generator::new(site)?;
    let output = generator.generate(&events, &settings)?;

    let duration = start.elapsed();
    tracing::info!("Generated {:?} in {:.2}s", output, duration.as_secs_f64());

    Ok(())
}

/// Watch content, settings and config for changes and regenerate
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    // Watch the nearest existing ancestor so a content directory created
    // after startup is still noticed
    let config_path = site.config_path();
    let mut watched = Vec::new();
    for path in [
        site.content_dir.as_path(),
        site.settings_path.as_path(),
        config_path.as_path(),
    ] {
        let target = path
            .ancestors()
            .find(|p| p.exists())
            .unwrap_or(site.base_dir.as_path())
            .to_path_buf();
        if watched.contains(&target) {
            continue;
        }
        watcher.watch(&target, notify::RecursiveMode::Recursive)?;
        tracing::debug!("Watching {:?}", target);
        watched.push(target);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut debounce = Debounce::new(Duration::from_millis(500));

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => {
                if !is_output_event(site, &event) {
                    debounce.record(Instant::now());
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }

        if debounce.ready(Instant::now()) {
            tracing::info!("File changed, regenerating...");
            if let Err(e) = run(site) {
                tracing::error!("Generation failed: {}", e);
            }
        }
    }

    Ok(())
}

/// Trailing-edge debounce: fires once nothing has changed for `quiet`
#[derive(Debug)]
struct Debounce {
    quiet: Duration,
    last_change: Option<Instant>,
}

impl Debounce {
    fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            last_change: None,
        }
    }

    fn record(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    /// True once per burst of changes, after the quiet period has elapsed
    fn ready(&mut self, now: Instant) -> bool {
        match self.last_change {
            Some(at) if now.duration_since(at) >= self.quiet => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }
}

/// Events caused by our own writes to the public directory
fn is_output_event(site: &Site, event: &notify::Event) -> bool {
    !event.paths.is_empty() && event.paths.iter().all(|p| p.starts_with(&site.public_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);

    #[test]
    fn test_debounce_idle_never_fires() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();
        assert!(!debounce.ready(start));
        assert!(!debounce.ready(start + QUIET * 4));
    }

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();
        debounce.record(start);

        assert!(!debounce.ready(start + Duration::from_millis(100)));
        assert!(debounce.ready(start + QUIET));
        // Fires once per burst
        assert!(!debounce.ready(start + QUIET * 2));
    }

    #[test]
    fn test_change_right_after_rebuild_is_not_dropped() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();

        debounce.record(start);
        assert!(debounce.ready(start + QUIET));

        // A second save lands 200ms after the rebuild
        let second = start + QUIET + Duration::from_millis(200);
        debounce.record(second);
        assert!(!debounce.ready(second + Duration::from_millis(100)));
        assert!(debounce.ready(second + QUIET));
    }

    #[test]
    fn test_burst_of_changes_rebuilds_once() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();

        for i in 0..5 {
            let at = start + Duration::from_millis(100 * i);
            debounce.record(at);
            assert!(!debounce.ready(at));
        }
        let last = start + Duration::from_millis(400);
        assert!(!debounce.ready(last + Duration::from_millis(499)));
        assert!(debounce.ready(last + QUIET));
        assert!(!debounce.ready(last + QUIET * 3));
    }
}
