//! Cross-game aggregation: one merged view per channel.

use std::sync::Arc;

use crate::types::{Channel, Video};

/// The merged view of one channel's videos across every game processed so
/// far in the run.
#[derive(Debug, Clone)]
pub struct ChannelCoverage {
    channel: Arc<Channel>,
    /// Game name → that game's videos, in game processing order.
    games: Vec<(String, Vec<Video>)>,
}

impl ChannelCoverage {
    fn new(channel: Arc<Channel>) -> Self {
        Self {
            channel,
            games: Vec::new(),
        }
    }

    #[must_use]
    pub fn channel(&self) -> &Arc<Channel> {
        &self.channel
    }

    /// Number of distinct games this channel has covered.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Total videos across all of the channel's games.
    #[must_use]
    pub fn total_videos(&self) -> usize {
        self.games.iter().map(|(_, videos)| videos.len()).sum()
    }

    /// Game entries in the order the games were processed.
    pub fn games(&self) -> impl Iterator<Item = (&str, &[Video])> {
        self.games
            .iter()
            .map(|(game, videos)| (game.as_str(), videos.as_slice()))
    }

    fn push_game(&mut self, game: &str, videos: Vec<Video>) {
        self.games.push((game.to_owned(), videos));
    }
}

/// Folds one game's grouping into the running cross-game state.
///
/// Channels are matched by id equality, not by pointer, so a channel
/// re-resolved as a separately constructed but equal value still lands in
/// its existing entry. Each call appends one game entry per channel in the
/// grouping; callers must feed each game through at most once per run.
///
/// `state` keeps first-appearance order across games. Ranking happens
/// later, in [`crate::rank::rank_channels`].
pub fn merge_game(
    state: &mut Vec<ChannelCoverage>,
    game: &str,
    grouping: Vec<(Arc<Channel>, Vec<Video>)>,
) {
    for (channel, videos) in grouping {
        if let Some(pos) = state.iter().position(|c| c.channel.id == channel.id) {
            state[pos].push_game(game, videos);
        } else {
            let mut coverage = ChannelCoverage::new(channel);
            coverage.push_game(game, videos);
            state.push(coverage);
        }
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
