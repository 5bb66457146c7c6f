//! HTTP client for the YouTube Data API v3.
//!
//! Wraps `reqwest` with API-key management, typed response
//! deserialization, and error-envelope handling. The API reports failures
//! (quota exhausted, invalid key) as a non-2xx status with a JSON
//! `{"error": {...}}` body; both paths surface as [`YoutubeError::ApiError`].

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Url};

use crate::error::YoutubeError;
use crate::types::{ChannelListResponse, SearchItem, SearchListResponse, VideoListResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client for the YouTube Data API v3.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("chanrank/0.1 (channel-coverage)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends the resource name instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| YoutubeError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches for videos matching `query` published after `published_after`.
    ///
    /// First page only, relevance order, at most `max_results` items. The
    /// result list may contain non-video hits whose `id.video_id` is `None`;
    /// callers skip those.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
        published_after: DateTime<Utc>,
    ) -> Result<Vec<SearchItem>, YoutubeError> {
        let max_results = max_results.to_string();
        let cutoff = published_after.to_rfc3339_opts(SecondsFormat::Secs, true);
        let url = self.build_url(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("maxResults", &max_results),
                ("type", "video"),
                ("order", "relevance"),
                ("publishedAfter", &cutoff),
            ],
        )?;
        let body = self.request_json(&url).await?;

        let response: SearchListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        Ok(response.items)
    }

    /// Fetches the view count for a single video.
    ///
    /// Returns `None` when the video no longer exists or publishes no
    /// statistics — "no data" is not an error at this boundary.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn video_view_count(&self, video_id: &str) -> Result<Option<u64>, YoutubeError> {
        let url = self.build_url("videos", &[("part", "statistics"), ("id", video_id)])?;
        let body = self.request_json(&url).await?;

        let response: VideoListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("videos(id={video_id})"),
                source: e,
            })?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.statistics)
            .and_then(|stats| stats.view_count)
            .and_then(|raw| parse_count(&raw, "viewCount", video_id)))
    }

    /// Fetches the subscriber count for a single channel.
    ///
    /// Returns `None` when the channel does not exist, publishes no
    /// statistics, or hides its subscriber count.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn channel_subscriber_count(
        &self,
        channel_id: &str,
    ) -> Result<Option<u64>, YoutubeError> {
        let url = self.build_url("channels", &[("part", "statistics"), ("id", channel_id)])?;
        let body = self.request_json(&url).await?;

        let response: ChannelListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("channels(id={channel_id})"),
                source: e,
            })?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.statistics)
            .and_then(|stats| {
                if stats.hidden_subscriber_count {
                    None
                } else {
                    stats.subscriber_count
                }
            })
            .and_then(|raw| parse_count(&raw, "subscriberCount", channel_id)))
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters, appending the API key last.
    fn build_url(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self.base_url.join(resource).map_err(|e| {
            YoutubeError::ApiError(format!("invalid resource path '{resource}': {e}"))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request and parses the response body as JSON, checking
    /// the error envelope before the HTTP status so the API's own message
    /// (e.g. "quota exceeded") wins over a bare status line.
    ///
    /// Error contexts carry only the URL path — never the full URL, which
    /// contains the API key.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, YoutubeError> {
        let path = url.path().to_owned();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => {
                Self::check_api_error(&value)?;
                if status.is_success() {
                    Ok(value)
                } else {
                    Err(YoutubeError::ApiError(format!("HTTP {status} from {path}")))
                }
            }
            Err(e) if status.is_success() => Err(YoutubeError::Deserialize {
                context: path,
                source: e,
            }),
            Err(_) => Err(YoutubeError::ApiError(format!("HTTP {status} from {path}"))),
        }
    }

    /// Checks the `{"error": {...}}` envelope and returns an error carrying
    /// the API's message if present.
    fn check_api_error(body: &serde_json::Value) -> Result<(), YoutubeError> {
        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error");
            let rendered = match error.get("code").and_then(serde_json::Value::as_i64) {
                Some(code) => format!("{message} (code {code})"),
                None => message.to_string(),
            };
            return Err(YoutubeError::ApiError(rendered));
        }
        Ok(())
    }
}

/// Parses a wire-format count string. Malformed values are logged and
/// treated as absent rather than failing the whole run.
fn parse_count(raw: &str, field: &str, id: &str) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(count) => Some(count),
        Err(_) => {
            tracing::warn!(field, id, raw, "unparseable statistics count");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> YoutubeClient {
        YoutubeClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_appends_resource_and_key() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client
            .build_url("videos", &[("part", "statistics"), ("id", "abc")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/videos?part=statistics&id=abc&key=test-key"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("https://www.googleapis.com/youtube/v3/");
        let url = client.build_url("search", &[("q", "valorant")]).unwrap();
        assert!(url.as_str().starts_with("https://www.googleapis.com/youtube/v3/search?"));
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client
            .build_url("search", &[("q", "age of empires & knights")])
            .unwrap();
        assert!(
            url.as_str().contains("age+of+empires+%26+knights")
                || url.as_str().contains("age%20of%20empires%20%26%20knights"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn parse_count_accepts_wire_format_numbers() {
        assert_eq!(parse_count("1042", "viewCount", "v1"), Some(1042));
        assert_eq!(parse_count("0", "viewCount", "v1"), Some(0));
    }

    #[test]
    fn parse_count_rejects_garbage() {
        assert_eq!(parse_count("not-a-number", "viewCount", "v1"), None);
        assert_eq!(parse_count("-5", "subscriberCount", "c1"), None);
    }
}
