//! Final ordering of the aggregated state.

use crate::aggregate::ChannelCoverage;
use crate::types::Video;

/// Orders the cross-game state for the report: channels covering the most
/// games first, ties broken by total video count descending.
///
/// `slice::sort_by` is stable, so channels tied on both keys keep their
/// aggregator insertion order (first appearance across the game list).
#[must_use]
pub fn rank_channels(mut state: Vec<ChannelCoverage>) -> Vec<ChannelCoverage> {
    state.sort_by(|a, b| {
        b.game_count()
            .cmp(&a.game_count())
            .then_with(|| b.total_videos().cmp(&a.total_videos()))
    });
    state
}

/// Orders one game's videos by view count, descending, into a fresh vector.
///
/// Applied at render time; the stored aggregate keeps discovery order.
#[must_use]
pub fn rank_videos(videos: &[Video]) -> Vec<Video> {
    let mut ranked = videos.to_vec();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked
}
