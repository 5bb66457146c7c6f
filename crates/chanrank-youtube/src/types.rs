//! YouTube Data API v3 response types.
//!
//! Only the fields chanrank reads are modeled. The API serializes field
//! names in camelCase, and statistics counts arrive as JSON *strings* on
//! the wire (`"viewCount": "1042"`) — they stay `String` here and are
//! parsed to `u64` by the client; modeling them as numbers causes
//! deserialization failure.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

/// Top-level envelope for the `search` endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One result from the `search` endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: SearchSnippet,
}

/// The polymorphic `id` object of a search result.
///
/// `videoId` is absent when the result is a channel or playlist hit, which
/// the API can return even for `type=video` queries in edge cases.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Snippet metadata for a search result: title plus publisher identity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

// ---------------------------------------------------------------------------
// videos
// ---------------------------------------------------------------------------

/// Top-level envelope for the `videos` endpoint.
///
/// `items` is empty when the requested video id no longer exists.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
}

// ---------------------------------------------------------------------------
// channels
// ---------------------------------------------------------------------------

/// Top-level envelope for the `channels` endpoint.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    #[serde(default)]
    pub statistics: Option<ChannelStatistics>,
}

/// Channel statistics. When a channel hides its subscriber count,
/// `hiddenSubscriberCount` is `true` and `subscriberCount` is omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<String>,
    #[serde(default)]
    pub hidden_subscriber_count: bool,
}
