use std::sync::{Arc, Mutex, PoisonError};

use search_core::{
    update, Category, Effect, FetchFailure, Msg, SearchItem, SearchModel, SearchState,
};
use search_logging::{search_debug, search_info};

use crate::channel::{EventStream, NotificationChannel, StateStream};
use crate::{ErrorSink, LogErrorSink, SearchProvider, ToggleEvent};

/// State container behind the search screen.
///
/// Construct one per screen and share it as `Arc<SearchStore>`. Every state
/// transition runs the pure [`update`] under one lock and publishes the
/// resulting snapshot before the lock is released, so subscribers never see
/// `items` and `loading` from different transitions.
///
/// Overlapping searches are not cancelled: each one publishes when it lands,
/// and the last to land wins.
pub struct SearchStore {
    provider: Arc<dyn SearchProvider>,
    errors: Arc<dyn ErrorSink>,
    model: Mutex<SearchModel>,
    channel: NotificationChannel,
}

impl SearchStore {
    pub fn new(provider: Arc<dyn SearchProvider>, errors: Arc<dyn ErrorSink>) -> Self {
        let model = SearchModel::new();
        let channel = NotificationChannel::new(model.view());
        Self {
            provider,
            errors,
            model: Mutex::new(model),
            channel,
        }
    }

    pub fn with_log_sink(provider: Arc<dyn SearchProvider>) -> Self {
        Self::new(provider, Arc::new(LogErrorSink))
    }

    /// The latest published snapshot.
    pub fn state(&self) -> SearchState {
        self.channel.current()
    }

    pub fn subscribe_state(&self) -> StateStream {
        self.channel.subscribe_state()
    }

    pub fn subscribe_events(&self) -> EventStream {
        self.channel.subscribe_events()
    }

    /// Run one search: publish `loading`, fetch both categories concurrently,
    /// then publish the merged list or report the failure.
    pub async fn search(&self, query: &str) {
        search_info!("search started query={query:?}");
        self.dispatch(Msg::SearchStarted {
            query: query.to_string(),
        });

        let (images, videos) = tokio::join!(
            self.provider.fetch_images(query),
            self.provider.fetch_videos(query)
        );

        let msg = match (images, videos) {
            (Ok(images), Ok(videos)) => {
                search_info!(
                    "search completed query={query:?} images={} videos={}",
                    images.len(),
                    videos.len()
                );
                Msg::SearchSucceeded { images, videos }
            }
            (Err(err), _) => {
                Msg::SearchFailed(FetchFailure::new(Category::Images, err.to_string()))
            }
            (_, Err(err)) => {
                Msg::SearchFailed(FetchFailure::new(Category::Videos, err.to_string()))
            }
        };
        self.dispatch(msg);
    }

    /// Flip the saved marker of the list entry with `target`'s id.
    ///
    /// Publishes a new snapshot and emits one [`ToggleEvent`]; does nothing
    /// when the id is not in the current list.
    pub fn toggle_bookmark(&self, target: &SearchItem) {
        self.dispatch(Msg::BookmarkToggled(target.clone()));
    }

    fn dispatch(&self, msg: Msg) {
        let failures = {
            let mut guard = self.model.lock().unwrap_or_else(PoisonError::into_inner);
            let model = std::mem::take(&mut *guard);
            let (mut model, effects) = update(model, msg);
            if model.consume_dirty() {
                self.channel.publish_state(model.view());
            }
            *guard = model;

            let mut failures = Vec::new();
            for effect in effects {
                match effect {
                    Effect::BookmarksChanged { items, toggled } => {
                        let reached = self.channel.emit(ToggleEvent { items, toggled });
                        search_debug!("toggle event delivered to {reached} subscribers");
                    }
                    Effect::ReportFailure(failure) => failures.push(failure),
                }
            }
            failures
        };

        for failure in &failures {
            self.errors.report(failure);
        }
    }
}
