use std::fs;

use pretty_assertions::assert_eq;
use search_core::{ItemKind, SearchItem};
use search_engine::{ensure_dir, BookmarkFile, BookmarkKind, PersistError};
use tempfile::TempDir;

fn item(id: &str, kind: ItemKind, saved: bool) -> SearchItem {
    SearchItem {
        id: id.to_string(),
        kind,
        title: format!("title {id}"),
        thumbnail_url: format!("https://thumb.example.com/{id}"),
        timestamp: "2024-01-01".to_string(),
        source_url: format!("https://source.example.com/{id}"),
        saved,
    }
}

#[test]
fn missing_file_loads_as_empty() {
    let temp = TempDir::new().unwrap();
    let file = BookmarkFile::new(temp.path().join("nested"));

    assert!(file.load().unwrap().is_empty());
}

#[test]
fn saved_items_are_recorded() {
    let temp = TempDir::new().unwrap();
    let file = BookmarkFile::new(temp.path().to_path_buf());

    let stored = file
        .apply_toggle(&item("i1", ItemKind::Image, true))
        .unwrap();

    assert_eq!(stored, 1);
    let bookmarks = file.load().unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].id, "i1");
    assert_eq!(bookmarks[0].kind, BookmarkKind::Image);
    assert_eq!(bookmarks[0].title, "title i1");
    assert!(!bookmarks[0].saved_utc.is_empty());
}

#[test]
fn unsaving_an_unknown_item_stores_nothing() {
    let temp = TempDir::new().unwrap();
    let file = BookmarkFile::new(temp.path().to_path_buf());

    let stored = file
        .apply_toggle(&item("v1", ItemKind::Video, false))
        .unwrap();

    assert_eq!(stored, 0);
    assert!(file.load().unwrap().is_empty());
}

#[test]
fn saving_another_item_keeps_earlier_bookmarks() {
    let temp = TempDir::new().unwrap();
    let file = BookmarkFile::new(temp.path().to_path_buf());

    file.apply_toggle(&item("i1", ItemKind::Image, true)).unwrap();
    let stored = file
        .apply_toggle(&item("v9", ItemKind::Video, true))
        .unwrap();

    assert_eq!(stored, 2);
    let ids: Vec<_> = file.load().unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["i1".to_string(), "v9".to_string()]);
}

#[test]
fn unsaving_removes_and_resaving_keeps_first_timestamp() {
    let temp = TempDir::new().unwrap();
    let file = BookmarkFile::new(temp.path().to_path_buf());

    file.apply_toggle(&item("i1", ItemKind::Image, true)).unwrap();
    let first_saved = file.load().unwrap()[0].saved_utc.clone();
    file.apply_toggle(&item("i1", ItemKind::Image, true)).unwrap();
    assert_eq!(file.load().unwrap()[0].saved_utc, first_saved);

    let stored = file
        .apply_toggle(&item("i1", ItemKind::Image, false))
        .unwrap();
    assert_eq!(stored, 0);
    assert!(file.load().unwrap().is_empty());
}

#[test]
fn malformed_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let file = BookmarkFile::new(temp.path().to_path_buf());
    fs::write(file.path(), "{ not json").unwrap();

    assert!(matches!(file.load(), Err(PersistError::Format(_))));
    assert!(file.apply_toggle(&item("i1", ItemKind::Image, true)).is_err());
}

#[test]
fn ensure_dir_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("bookmarks");
    assert!(!new_dir.exists());

    ensure_dir(&new_dir).unwrap();

    assert!(new_dir.is_dir());
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let not_a_dir = temp.path().join("not_a_dir");
    fs::write(&not_a_dir, "x").unwrap();

    let file = BookmarkFile::new(not_a_dir.clone());
    let result = file.apply_toggle(&item("i1", ItemKind::Image, true));

    assert!(matches!(result, Err(PersistError::OutputDir(_))));
    assert!(!not_a_dir.with_file_name("bookmarks.json").exists());
}
