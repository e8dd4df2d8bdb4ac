use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::AUTHORIZATION;
use search_core::{ImageResultSet, VideoResultSet};
use search_logging::search_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{ImageSearchResponse, VideoSearchResponse};
use crate::{FailureKind, ProviderError, SearchProvider};

const IMAGE_PATH: &str = "/v2/search/image";
const VIDEO_PATH: &str = "/v2/search/vclip";

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Scheme and host of the search API, optionally with a path prefix.
    pub base_url: String,
    /// Sent as `Authorization: KakaoAK <key>` when present.
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://dapi.kakao.com".to_string(),
            api_key: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Search provider backed by the Kakao-style image/video search HTTP API.
#[derive(Debug, Clone)]
pub struct HttpSearchProvider {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl HttpSearchProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProviderError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str, query: &str) -> Result<Url, ProviderError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))
            .map_err(|err| ProviderError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut().append_pair("query", query);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        search_debug!("GET {}", url.path());
        let mut request = self.client.get(url);
        if let Some(key) = self.settings.api_key.as_deref() {
            request = request.header(AUTHORIZATION, format!("KakaoAK {key}"));
        }

        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body)
            .map_err(|err| ProviderError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn fetch_images(&self, query: &str) -> Result<ImageResultSet, ProviderError> {
        let url = self.endpoint(IMAGE_PATH, query)?;
        let response: ImageSearchResponse = self.get_json(url).await?;
        Ok(response.into())
    }

    async fn fetch_videos(&self, query: &str) -> Result<VideoResultSet, ProviderError> {
        let url = self.endpoint(VIDEO_PATH, query)?;
        let response: VideoSearchResponse = self.get_json(url).await?;
        Ok(response.into())
    }
}

fn too_large(max_bytes: u64, actual: u64) -> ProviderError {
    ProviderError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ProviderError::new(FailureKind::Decode, err.to_string());
    }
    ProviderError::new(FailureKind::Network, err.to_string())
}
