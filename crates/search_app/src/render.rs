use search_core::{ItemKind, SearchState};
use search_engine::StateStream;
use tokio::task::JoinHandle;

pub fn render(state: &SearchState) -> String {
    if state.loading {
        return "searching...".to_string();
    }
    if state.items.is_empty() {
        return "no results".to_string();
    }
    state
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mark = if item.saved { '*' } else { ' ' };
            let kind = match item.kind {
                ItemKind::Image => "image",
                ItemKind::Video => "video",
            };
            format!(
                "{:>3}. [{mark}] {kind} {} {} <{}>",
                index + 1,
                item.timestamp,
                item.title,
                item.source_url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print every published snapshot until the store goes away.
pub fn spawn_renderer(mut states: StateStream) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(state) = states.changed().await {
            println!("{}", render(&state));
        }
    })
}
