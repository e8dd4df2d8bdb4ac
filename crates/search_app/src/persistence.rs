use search_engine::{BookmarkFile, EventStream};
use search_logging::{search_error, search_info};
use tokio::task::JoinHandle;

/// Record every toggle event in the bookmark file, in emission order.
///
/// Ends when the event channel closes.
pub fn spawn_bookmark_writer(mut events: EventStream, file: BookmarkFile) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let writer = file.clone();
            let result =
                tokio::task::spawn_blocking(move || writer.apply_toggle(&event.toggled)).await;
            match result {
                Ok(Ok(stored)) => {
                    search_info!("bookmarks saved count={} path={:?}", stored, file.path());
                }
                Ok(Err(err)) => {
                    search_error!("Failed to save bookmarks to {:?}: {}", file.path(), err);
                }
                Err(err) => {
                    search_error!("Bookmark writer task failed: {}", err);
                }
            }
        }
    })
}
