//! The per-game scan loop: discovery, identity resolution, grouping, merge.
//!
//! Games are processed strictly one at a time in list order; every provider
//! call for a game completes before the next game starts. Any provider
//! error aborts the whole run via `?` — a game with zero results is a
//! notice, not an error.

use chrono::{DateTime, Months, Utc};

use chanrank_core::{group_by_channel, merge_game, ChannelCache, ChannelCoverage, Video};
use chanrank_youtube::YoutubeClient;

/// Start of the coverage window: six months before `now`.
pub(crate) fn coverage_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(6)).unwrap_or(now)
}

/// Runs the full scan across `games` and returns the merged, unranked state.
///
/// The channel identity cache lives for exactly this call, so subscriber
/// counts are fetched at most once per channel even when a channel shows up
/// under several games.
pub(crate) async fn run_scan(
    client: &YoutubeClient,
    games: &[String],
    max_videos: u32,
    window_start: DateTime<Utc>,
) -> anyhow::Result<Vec<ChannelCoverage>> {
    let mut cache = ChannelCache::new();
    let mut state: Vec<ChannelCoverage> = Vec::new();

    for game in games {
        println!("Searching for videos on {game}...");
        let videos = discover_game(client, &mut cache, game, max_videos, window_start).await?;

        if videos.is_empty() {
            tracing::info!(game = %game, "no videos found in the coverage window");
            println!("No channels found for {game} within the last 6 months.");
            println!();
            continue;
        }

        let grouping = group_by_channel(videos);
        println!("Found {} channels with videos on {game}.", grouping.len());
        println!();
        merge_game(&mut state, game, grouping);
    }

    tracing::info!(
        channels = state.len(),
        distinct_identities = cache.len(),
        "scan complete"
    );
    Ok(state)
}

/// Searches one game and resolves each hit into a [`Video`] carrying its
/// view count and its (cached) channel identity.
///
/// Search hits without a video id — channel or playlist results — are
/// skipped. A missing view count becomes 0 here, which is the point where
/// the provider's "no data" answer turns into a report value.
async fn discover_game(
    client: &YoutubeClient,
    cache: &mut ChannelCache,
    game: &str,
    max_videos: u32,
    window_start: DateTime<Utc>,
) -> anyhow::Result<Vec<Video>> {
    let query = format!("{game} game");
    let items = client.search_videos(&query, max_videos, window_start).await?;

    let mut videos = Vec::with_capacity(items.len());
    for item in items {
        let Some(video_id) = item.id.video_id else {
            tracing::debug!(game = %game, "skipping non-video search result");
            continue;
        };

        let views = client.video_view_count(&video_id).await?.unwrap_or(0);

        let channel_id = &item.snippet.channel_id;
        let channel = cache
            .resolve(channel_id, &item.snippet.channel_title, || {
                client.channel_subscriber_count(channel_id)
            })
            .await?;

        videos.push(Video {
            channel,
            title: item.snippet.title,
            views,
            url: format!("https://www.youtube.com/watch?v={video_id}"),
        });
    }

    Ok(videos)
}
