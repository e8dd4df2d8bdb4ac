//! JSON bodies returned by the search API.
use serde::Deserialize;

use search_core::{ImageDocument, ImageResultSet, VideoDocument, VideoResultSet};

#[derive(Debug, Deserialize)]
pub(crate) struct ImageSearchResponse {
    #[serde(default)]
    documents: Option<Vec<ImageDocumentBody>>,
}

#[derive(Debug, Deserialize)]
struct ImageDocumentBody {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    display_sitename: String,
    #[serde(default)]
    thumbnail_url: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    datetime: String,
    #[serde(default)]
    doc_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoSearchResponse {
    #[serde(default)]
    documents: Option<Vec<VideoDocumentBody>>,
}

#[derive(Debug, Deserialize)]
struct VideoDocumentBody {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    datetime: String,
    #[serde(default)]
    url: String,
}

impl From<ImageSearchResponse> for ImageResultSet {
    fn from(response: ImageSearchResponse) -> Self {
        Self {
            documents: response
                .documents
                .map(|docs| docs.into_iter().map(ImageDocument::from).collect()),
        }
    }
}

impl From<ImageDocumentBody> for ImageDocument {
    fn from(body: ImageDocumentBody) -> Self {
        // The API has no id field; the image url is unique per image.
        let id = non_empty(body.id)
            .or_else(|| non_empty(Some(body.image_url)))
            .unwrap_or_else(|| body.doc_url.clone());
        Self {
            id,
            display_sitename: body.display_sitename,
            thumbnail_url: body.thumbnail_url,
            datetime: body.datetime,
            doc_url: body.doc_url,
        }
    }
}

impl From<VideoSearchResponse> for VideoResultSet {
    fn from(response: VideoSearchResponse) -> Self {
        Self {
            documents: response
                .documents
                .map(|docs| docs.into_iter().map(VideoDocument::from).collect()),
        }
    }
}

impl From<VideoDocumentBody> for VideoDocument {
    fn from(body: VideoDocumentBody) -> Self {
        let id = non_empty(body.id).unwrap_or_else(|| body.url.clone());
        Self {
            id,
            author: body.author,
            thumbnail: body.thumbnail,
            datetime: body.datetime,
            url: body.url,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
