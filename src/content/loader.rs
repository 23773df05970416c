//! Content loader - loads events from the content directory

use std::cmp::Reverse;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::error::LoadError;
use super::{EventRecord, FrontMatter};
use crate::config::{MalformedPolicy, SiteConfig};

/// Loads event records from a flat content directory
#[derive(Debug, Clone, Copy)]
pub struct EventLoader {
    skip_hidden: bool,
    on_malformed: MalformedPolicy,
}

impl Default for EventLoader {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            on_malformed: MalformedPolicy::Fail,
        }
    }
}

impl EventLoader {
    /// Create a loader from site configuration
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            skip_hidden: config.skip_hidden,
            on_malformed: config.on_malformed,
        }
    }

    /// Set the malformed-file policy
    pub fn on_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Set whether dotfiles are ignored
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Load every event in `dir`, newest first.
    ///
    /// A missing directory is an empty listing. Every regular file in the
    /// directory is treated as an event regardless of extension;
    /// subdirectories are not descended into.
    pub fn list_events(&self, dir: &Path) -> Result<Vec<EventRecord>, LoadError> {
        if !dir.is_dir() {
            tracing::debug!("No content directory at {:?}", dir);
            return Ok(Vec::new());
        }

        let mut events = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(dir).to_path_buf();
                    let err = LoadError::Io {
                        path,
                        source: e.into(),
                    };
                    self.handle_malformed(err)?;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if self.skip_hidden && file_name.starts_with('.') {
                tracing::debug!("Skipping hidden file {:?}", entry.path());
                continue;
            }

            match load_event(entry.path(), &file_name) {
                Ok(event) => {
                    tracing::debug!("Loaded event {:?} from {:?}", event.slug, entry.path());
                    events.push(event);
                }
                Err(e) => self.handle_malformed(e)?,
            }
        }

        sort_events(&mut events);

        Ok(events)
    }

    fn handle_malformed(&self, err: LoadError) -> Result<(), LoadError> {
        match self.on_malformed {
            MalformedPolicy::Fail => Err(err),
            MalformedPolicy::Skip => {
                tracing::warn!("Skipping {:?}: {}", err.path(), err);
                Ok(())
            }
        }
    }
}

/// Load a single event from a file
fn load_event(path: &Path, file_name: &str) -> Result<EventRecord, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (fm, _body) = FrontMatter::parse(&content).map_err(|source| LoadError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(EventRecord::new(file_name, fm))
}

/// Sort by date descending (newest first).
///
/// Events without a parseable date go last. Ties are broken by slug so the
/// order never depends on directory enumeration.
pub fn sort_events(events: &mut [EventRecord]) {
    events.sort_by_cached_key(|e| (Reverse(e.timestamp()), e.slug.clone()));
}

/// Load every event in `dir` with the default policy (fail fast, skip dotfiles)
pub fn list_events(dir: &Path) -> Result<Vec<EventRecord>, LoadError> {
    EventLoader::default().list_events(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_event(dir: &Path, name: &str, title: &str, date: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(
            &path,
            format!("---\ntitle: {}\ndate: {}\n---\n\nBody of {}.\n", title, date, title),
        )
        .unwrap();
        path
    }

    fn slugs(events: &[EventRecord]) -> Vec<&str> {
        events.iter().map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let events = list_events(&dir.path().join("content/events")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_events(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "new-year.md", "New Year Talk", "2024-01-01");
        write_event(dir.path(), "mid-year.md", "Mid Year Forum", "2024-06-01");

        let events = list_events(dir.path()).unwrap();
        assert_eq!(slugs(&events), vec!["mid-year", "new-year"]);
        assert_eq!(events[0].title.as_deref(), Some("Mid Year Forum"));
        assert_eq!(events[0].date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_strictly_descending() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "a.md", "A", "2023-03-10");
        write_event(dir.path(), "b.md", "B", "2025-02-01 09:00");
        write_event(dir.path(), "c.md", "C", "2024-11-30");
        write_event(dir.path(), "d.md", "D", "2024-11-30T08:00:00Z");

        let events = list_events(dir.path()).unwrap();
        assert_eq!(events.len(), 4);
        for pair in events.windows(2) {
            assert!(pair[0].timestamp() > pair[1].timestamp());
        }
        assert_eq!(slugs(&events), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_slug_without_md_suffix_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "seminar.md", "Seminar", "2024-05-01");
        write_event(dir.path(), "workshop.markdown", "Workshop", "2024-04-01");
        write_event(dir.path(), "notes.txt", "Notes", "2024-03-01");

        let events = list_events(dir.path()).unwrap();
        assert_eq!(slugs(&events), vec!["seminar", "workshop.markdown", "notes.txt"]);
    }

    #[test]
    fn test_invalid_and_missing_dates_sort_last() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "dated.md", "Dated", "2020-01-01");
        write_event(dir.path(), "tbd.md", "TBD", "to be announced");
        fs::write(dir.path().join("undated.md"), "---\ntitle: Undated\n---\n").unwrap();

        let events = list_events(dir.path()).unwrap();
        assert_eq!(slugs(&events), vec!["dated", "tbd", "undated"]);
    }

    #[test]
    fn test_missing_fields_stay_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bare.md"), "No front-matter here.\n").unwrap();

        let events = list_events(dir.path()).unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.slug, "bare");
        assert_eq!(event.title, None);
        assert_eq!(event.description, None);
        assert_eq!(event.location, None);
        assert_eq!(event.thumbnail, None);
        assert_eq!(event.date, None);
    }

    #[test]
    fn test_listing_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "x.md", "X", "2024-02-02");
        write_event(dir.path(), "y.md", "Y", "2024-02-02");
        write_event(dir.path(), "z.md", "Z", "later");

        let first = list_events(dir.path()).unwrap();
        let second = list_events(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(slugs(&first), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_hidden_files_and_subdirectories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "visible.md", "Visible", "2024-01-01");
        fs::write(dir.path().join(".DS_Store"), [0u8, 159, 146, 150]).unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        write_event(&dir.path().join("drafts"), "draft.md", "Draft", "2024-02-01");

        let events = list_events(dir.path()).unwrap();
        assert_eq!(slugs(&events), vec!["visible"]);
    }

    #[test]
    fn test_hidden_files_load_when_not_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), ".pinned.md", "Pinned", "2024-01-01");

        let events = EventLoader::default()
            .skip_hidden(false)
            .list_events(dir.path())
            .unwrap();
        assert_eq!(slugs(&events), vec![".pinned"]);
    }

    #[test]
    fn test_malformed_file_fails_whole_listing() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "good.md", "Good", "2024-01-01");
        let bad = dir.path().join("bad.md");
        fs::write(&bad, "---\ntitle: [broken\n---\n").unwrap();

        let err = list_events(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::FrontMatter { .. }));
        assert_eq!(err.path(), bad.as_path());
    }

    #[test]
    fn test_brace_body_and_unclosed_block_load() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "good.md", "Good", "2024-01-01");
        fs::write(dir.path().join("notes.md"), "{{< youtube abc >}}\nSome body\n").unwrap();
        fs::write(
            dir.path().join("open.md"),
            "---\ntitle: Open\ndate: 2024-06-01\n",
        )
        .unwrap();

        let events = list_events(dir.path()).unwrap();
        assert_eq!(slugs(&events), vec!["open", "good", "notes"]);
        assert_eq!(events[0].title.as_deref(), Some("Open"));
        assert_eq!(events[2].title, None);
    }

    #[test]
    fn test_non_utf8_file_fails_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("binary.md"), [0xffu8, 0xfe, 0x00]).unwrap();

        let err = list_events(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_skipped_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        write_event(dir.path(), "good.md", "Good", "2024-01-01");
        fs::write(dir.path().join("bad.md"), "---\ntitle: [broken\n---\n").unwrap();
        fs::write(dir.path().join("toml.md"), "---toml\ntitle = \"x\"\n---\n").unwrap();

        let events = EventLoader::default()
            .on_malformed(MalformedPolicy::Skip)
            .list_events(dir.path())
            .unwrap();
        assert_eq!(slugs(&events), vec!["good"]);
    }

    #[test]
    fn test_loader_from_config() {
        let config = SiteConfig {
            on_malformed: MalformedPolicy::Skip,
            skip_hidden: false,
            ..Default::default()
        };
        let loader = EventLoader::new(&config);
        assert_eq!(loader.on_malformed, MalformedPolicy::Skip);
        assert!(!loader.skip_hidden);
    }
}
