use search_core::{ImageResultSet, VideoResultSet};

use crate::ProviderError;

/// The two independent fetch operations a search needs, one per category.
///
/// A result set whose document list is absent is a success, not a failure.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn fetch_images(&self, query: &str) -> Result<ImageResultSet, ProviderError>;

    async fn fetch_videos(&self, query: &str) -> Result<VideoResultSet, ProviderError>;
}
