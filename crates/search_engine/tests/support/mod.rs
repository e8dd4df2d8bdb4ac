#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use search_core::{
    FetchFailure, ImageDocument, ImageResultSet, SearchItem, VideoDocument, VideoResultSet,
};
use search_engine::{ErrorSink, ProviderError, SearchProvider};
use tokio::sync::Notify;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

type Gate = Option<Arc<Notify>>;

/// Provider that replays queued responses, one per call and category.
///
/// An image response may carry a gate; the call waits on it before returning.
#[derive(Default)]
pub struct ScriptedProvider {
    images: Mutex<VecDeque<(Gate, Result<ImageResultSet, ProviderError>)>>,
    videos: Mutex<VecDeque<Result<VideoResultSet, ProviderError>>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_images(self, result: Result<ImageResultSet, ProviderError>) -> Self {
        self.images.lock().unwrap().push_back((None, result));
        self
    }

    pub fn push_gated_images(
        self,
        gate: Arc<Notify>,
        result: Result<ImageResultSet, ProviderError>,
    ) -> Self {
        self.images.lock().unwrap().push_back((Some(gate), result));
        self
    }

    pub fn push_videos(self, result: Result<VideoResultSet, ProviderError>) -> Self {
        self.videos.lock().unwrap().push_back(result);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SearchProvider for ScriptedProvider {
    async fn fetch_images(&self, query: &str) -> Result<ImageResultSet, ProviderError> {
        self.queries.lock().unwrap().push(query.to_string());
        let next = self.images.lock().unwrap().pop_front();
        let (gate, result) = next.unwrap_or((None, Ok(ImageResultSet::default())));
        if let Some(gate) = gate {
            gate.notified().await;
        }
        result
    }

    async fn fetch_videos(&self, _query: &str) -> Result<VideoResultSet, ProviderError> {
        let next = self.videos.lock().unwrap().pop_front();
        next.unwrap_or(Ok(VideoResultSet::default()))
    }
}

#[derive(Default)]
pub struct CollectingSink {
    failures: Mutex<Vec<FetchFailure>>,
}

impl CollectingSink {
    pub fn failures(&self) -> Vec<FetchFailure> {
        self.failures.lock().unwrap().clone()
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, failure: &FetchFailure) {
        self.failures.lock().unwrap().push(failure.clone());
    }
}

pub fn images(docs: &[(&str, &str)]) -> ImageResultSet {
    ImageResultSet::new(
        docs.iter()
            .map(|(id, datetime)| ImageDocument {
                id: id.to_string(),
                display_sitename: format!("site {id}"),
                thumbnail_url: format!("https://thumb.example.com/{id}"),
                datetime: datetime.to_string(),
                doc_url: format!("https://doc.example.com/{id}"),
            })
            .collect(),
    )
}

pub fn videos(docs: &[(&str, &str)]) -> VideoResultSet {
    VideoResultSet::new(
        docs.iter()
            .map(|(id, datetime)| VideoDocument {
                id: id.to_string(),
                author: format!("author {id}"),
                thumbnail: format!("https://thumb.example.com/{id}"),
                datetime: datetime.to_string(),
                url: format!("https://video.example.com/{id}"),
            })
            .collect(),
    )
}

pub fn ids(items: &[SearchItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}
