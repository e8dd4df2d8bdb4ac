use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use search_engine::{BookmarkFile, HttpSearchProvider, SearchStore};
use search_logging::{search_info, search_warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::{AppConfig, CONFIG_FILENAME};
use crate::{persistence, render};

const HELP: &str = "type a query to search, :save N to toggle item N, :bookmarks, :quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Save(usize),
    Bookmarks,
    Quit,
    Help,
    Ignore,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Ignore;
        }
        match line.split_once(char::is_whitespace) {
            Some((":save", arg)) => match arg.trim().parse() {
                Ok(index) if index > 0 => Command::Save(index),
                _ => Command::Help,
            },
            _ => match line {
                ":bookmarks" => Command::Bookmarks,
                ":quit" | ":q" => Command::Quit,
                ":help" | ":save" => Command::Help,
                query => Command::Search(query.to_string()),
            },
        }
    }
}

pub async fn run() -> Result<()> {
    let config = AppConfig::load(Path::new(CONFIG_FILENAME))?.with_env_overrides();
    search_logging::initialize(config.log_destination.into(), &config.log_file);
    if config.api_key.is_none() {
        search_warn!("no API key configured; the search provider may reject requests");
    }

    let provider = HttpSearchProvider::new(config.provider_settings())
        .context("building search client")?;
    let store = Arc::new(SearchStore::with_log_sink(Arc::new(provider)));
    let bookmarks = BookmarkFile::new(config.bookmarks_dir.clone());

    let renderer = render::spawn_renderer(store.subscribe_state());
    let writer = persistence::spawn_bookmark_writer(store.subscribe_events(), bookmarks.clone());
    search_info!("search app started base_url={}", config.base_url);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match Command::parse(&line) {
            Command::Search(query) => {
                let store = store.clone();
                tokio::spawn(async move { store.search(&query).await });
            }
            Command::Save(number) => {
                let state = store.state();
                match state.items.get(number - 1) {
                    Some(item) => store.toggle_bookmark(item),
                    None => println!("no item {number}"),
                }
            }
            Command::Bookmarks => match bookmarks.load() {
                Ok(saved) if saved.is_empty() => println!("no bookmarks"),
                Ok(saved) => {
                    for bookmark in saved {
                        println!(
                            "{} {} <{}>",
                            bookmark.saved_utc, bookmark.title, bookmark.source_url
                        );
                    }
                }
                Err(err) => println!("could not read bookmarks: {err}"),
            },
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Ignore => {}
        }
    }

    renderer.abort();
    // The writer drains once every store handle is gone, including those held
    // by searches still in flight.
    drop(store);
    writer.await.context("bookmark writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("  red fox "), Command::Search("red fox".to_string()));
        assert_eq!(Command::parse(":save 3"), Command::Save(3));
        assert_eq!(Command::parse(":bookmarks"), Command::Bookmarks);
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Ignore);
    }

    #[test]
    fn invalid_save_numbers_show_help() {
        assert_eq!(Command::parse(":save"), Command::Help);
        assert_eq!(Command::parse(":save 0"), Command::Help);
        assert_eq!(Command::parse(":save two"), Command::Help);
    }
}
