//! File system watcher for watch mode

use crate::draft::is_draft_file;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const DEBOUNCE_MS: u64 = 300;

/// Watches a directory for draft file changes and emits paths on a channel
pub struct DraftWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<notify::Event>>,
    patterns: Vec<String>,
}

fn is_create_or_modify(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

impl DraftWatcher {
    /// Start watching the given path (file or directory)
    pub fn watch(path: &Path, patterns: &[&str]) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(DEBOUNCE_MS)),
        )?;

        if path.is_dir() {
            watcher.watch(path, RecursiveMode::Recursive)?;
        } else if let Some(parent) = path.parent() {
            watcher.watch(parent, RecursiveMode::Recursive)?;
        }

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        })
    }

    /// Collect draft paths from an event
    fn paths_from_event(&self, event: &notify::Event) -> Vec<PathBuf> {
        if !is_create_or_modify(&event.kind) {
            return vec![];
        }
        let patterns: Vec<&str> = self.patterns.iter().map(|p| p.as_str()).collect();
        event
            .paths
            .iter()
            .filter(|p| is_draft_file(p, &patterns))
            .cloned()
            .collect()
    }

    /// Wait for the next batch of changes. Blocks until at least one change,
    /// then drains further events for DEBOUNCE_MS.
    pub fn next_changes(&self) -> Vec<PathBuf> {
        let mut all = std::collections::HashSet::new();

        match self.receiver.recv_timeout(Duration::from_secs(3600)) {
            Ok(Ok(event)) => {
                for p in self.paths_from_event(&event) {
                    all.insert(p);
                }
            }
            Ok(Err(_)) => return vec![],
            Err(_) => return vec![],
        }

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS));
        while let Ok(ev) = self.receiver.try_recv() {
            if let Ok(event) = ev {
                for p in self.paths_from_event(&event) {
                    all.insert(p);
                }
            }
        }

        all.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, RemoveKind};

    fn watcher_on(dir: &Path) -> DraftWatcher {
        DraftWatcher::watch(dir, &[".draft.json"]).unwrap()
    }

    #[test]
    fn test_watch_creates_watcher() {
        let dir = tempfile::TempDir::new().unwrap();
        let watcher = DraftWatcher::watch(dir.path(), &[".draft.json"]);
        assert!(watcher.is_ok(), "watch should succeed on a temp dir");
        // next_changes() blocks for up to an hour, so it is not called here.
    }

    #[test]
    fn test_watch_single_file_watches_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("post.draft.json");
        std::fs::write(&file, "{}").unwrap();
        let watcher = DraftWatcher::watch(&file, &[".draft.json"]);
        assert!(watcher.is_ok());
    }

    #[test]
    fn test_paths_from_event_filters_drafts() {
        let dir = tempfile::TempDir::new().unwrap();
        let watcher = watcher_on(dir.path());

        let event = notify::Event {
            kind: EventKind::Create(CreateKind::File),
            paths: vec![
                PathBuf::from("posts/praia.draft.json"),
                PathBuf::from("posts/notas.txt"),
                PathBuf::from("posts/serra.draft.json"),
            ],
            attrs: Default::default(),
        };
        let paths = watcher.paths_from_event(&event);
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&PathBuf::from("posts/praia.draft.json")));

        let remove_event = notify::Event {
            kind: EventKind::Remove(RemoveKind::File),
            paths: vec![PathBuf::from("posts/praia.draft.json")],
            attrs: Default::default(),
        };
        assert!(watcher.paths_from_event(&remove_event).is_empty());
    }

    #[test]
    fn test_is_create_or_modify() {
        use notify::event::{DataChange, ModifyKind};
        assert!(is_create_or_modify(&EventKind::Create(CreateKind::File)));
        assert!(is_create_or_modify(&EventKind::Modify(ModifyKind::Data(
            DataChange::Content
        ))));
        assert!(!is_create_or_modify(&EventKind::Remove(RemoveKind::File)));
    }
}
