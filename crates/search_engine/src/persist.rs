use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use search_core::{ItemKind, SearchItem};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

const BOOKMARKS_FILENAME: &str = "bookmarks.json";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("bookmark directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("bookmark file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkKind {
    Image,
    Video,
}

impl From<ItemKind> for BookmarkKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Image => BookmarkKind::Image,
            ItemKind::Video => BookmarkKind::Video,
        }
    }
}

/// One persisted saved marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBookmark {
    pub id: String,
    pub kind: BookmarkKind,
    pub title: String,
    pub thumbnail_url: String,
    pub timestamp: String,
    pub source_url: String,
    /// When the marker was first saved (RFC 3339, UTC).
    pub saved_utc: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct BookmarkLedger {
    bookmarks: Vec<SavedBookmark>,
}

/// JSON ledger of saved items, updated from toggle events.
#[derive(Debug, Clone)]
pub struct BookmarkFile {
    dir: PathBuf,
}

impl BookmarkFile {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(BOOKMARKS_FILENAME)
    }

    /// Load saved bookmarks; a missing file means none.
    pub fn load(&self) -> Result<Vec<SavedBookmark>, PersistError> {
        let content = match fs::read_to_string(self.path()) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let ledger: BookmarkLedger = serde_json::from_str(&content)?;
        Ok(ledger.bookmarks)
    }

    /// Record the entry flipped by one toggle event.
    ///
    /// A saved entry is added (or refreshed, keeping its first `saved_utc`);
    /// an unsaved one is removed. Every other bookmark is left alone, so
    /// bookmarks from earlier searches survive. Returns the number of
    /// bookmarks stored afterwards.
    pub fn apply_toggle(&self, toggled: &SearchItem) -> Result<usize, PersistError> {
        ensure_dir(&self.dir)?;
        let mut bookmarks = self.load()?;

        let existing = bookmarks.iter().position(|b| b.id == toggled.id);
        match (toggled.saved, existing) {
            (true, Some(index)) => {
                let saved_utc = std::mem::take(&mut bookmarks[index].saved_utc);
                bookmarks[index] = bookmark_from(toggled, saved_utc);
            }
            (true, None) => bookmarks.push(bookmark_from(toggled, Utc::now().to_rfc3339())),
            (false, Some(index)) => {
                bookmarks.remove(index);
            }
            (false, None) => {}
        }

        let ledger = BookmarkLedger { bookmarks };
        let content = serde_json::to_string_pretty(&ledger)?;
        write_atomically(&self.dir, BOOKMARKS_FILENAME, &content)?;
        Ok(ledger.bookmarks.len())
    }
}

fn bookmark_from(item: &SearchItem, saved_utc: String) -> SavedBookmark {
    SavedBookmark {
        id: item.id.clone(),
        kind: item.kind.into(),
        title: item.title.clone(),
        thumbnail_url: item.thumbnail_url.clone(),
        timestamp: item.timestamp.clone(),
        source_url: item.source_url.clone(),
        saved_utc,
    }
}

/// Ensure the directory exists and is writable; create it if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Write `{dir}/{filename}` through a temp file and rename, so readers never
/// see a half-written ledger.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
    Ok(target)
}
