use crate::{ImageDocument, ImageResultSet, ItemKind, SearchItem, VideoDocument, VideoResultSet};

/// Merge image and video results into one list, newest first.
///
/// Images are concatenated before videos and the combined list is sorted with a
/// stable sort, so equal timestamps keep images ahead of videos and keep each
/// category's source order.
pub fn merge_results(images: ImageResultSet, videos: VideoResultSet) -> Vec<SearchItem> {
    let mut items = Vec::with_capacity(images.len() + videos.len());
    items.extend(
        images
            .documents
            .unwrap_or_default()
            .into_iter()
            .map(image_item),
    );
    items.extend(
        videos
            .documents
            .unwrap_or_default()
            .into_iter()
            .map(video_item),
    );
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items
}

fn image_item(document: ImageDocument) -> SearchItem {
    SearchItem {
        id: document.id,
        kind: ItemKind::Image,
        title: document.display_sitename,
        thumbnail_url: document.thumbnail_url,
        timestamp: document.datetime,
        source_url: document.doc_url,
        saved: false,
    }
}

fn video_item(document: VideoDocument) -> SearchItem {
    SearchItem {
        id: document.id,
        kind: ItemKind::Video,
        title: document.author,
        thumbnail_url: document.thumbnail,
        timestamp: document.datetime,
        source_url: document.url,
        saved: false,
    }
}
