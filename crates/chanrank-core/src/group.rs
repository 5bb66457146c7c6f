//! Per-game grouping of discovered videos by channel.

use std::sync::Arc;

use crate::types::{Channel, Video};

/// Groups one game's videos by their channel.
///
/// Channels enter the grouping in first-appearance (discovery) order; each
/// channel's videos stay in discovery order. The grouping is then re-sorted
/// by subscriber count descending into a fresh vector — the sort is stable,
/// so channels with equal subscriber counts keep their discovery order.
///
/// An empty input yields an empty grouping. That is not an error here;
/// whether "no results" is worth reporting is the caller's decision.
#[must_use]
pub fn group_by_channel(videos: Vec<Video>) -> Vec<(Arc<Channel>, Vec<Video>)> {
    let mut grouped: Vec<(Arc<Channel>, Vec<Video>)> = Vec::new();

    for video in videos {
        if let Some(pos) = grouped.iter().position(|(c, _)| c.id == video.channel.id) {
            grouped[pos].1.push(video);
        } else {
            let channel = Arc::clone(&video.channel);
            grouped.push((channel, vec![video]));
        }
    }

    grouped.sort_by(|a, b| b.0.subscribers.cmp(&a.0.subscribers));
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, subscribers: u64) -> Arc<Channel> {
        Arc::new(Channel {
            id: id.to_owned(),
            title: format!("channel {id}"),
            subscribers,
        })
    }

    fn video(channel: &Arc<Channel>, views: u64) -> Video {
        Video {
            channel: Arc::clone(channel),
            title: format!("video @{views}"),
            views,
            url: format!("https://www.youtube.com/watch?v={views}"),
        }
    }

    #[test]
    fn groups_by_channel_and_orders_by_subscribers_descending() {
        // The §8-style scenario: two videos from a 100-sub channel, one from
        // a 50-sub channel, interleaved with the small channel first.
        let c1 = channel("C1", 100);
        let c2 = channel("C2", 50);
        let videos = vec![video(&c2, 500), video(&c1, 1000), video(&c1, 3000)];

        let grouped = group_by_channel(videos);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0.id, "C1");
        assert_eq!(grouped[1].0.id, "C2");
        // Within a channel, discovery order is preserved; ranking by views
        // happens at render time, not here.
        let c1_views: Vec<u64> = grouped[0].1.iter().map(|v| v.views).collect();
        assert_eq!(c1_views, vec![1000, 3000]);
    }

    #[test]
    fn equal_subscriber_counts_keep_discovery_order() {
        let a = channel("A", 70);
        let b = channel("B", 70);
        let grouped = group_by_channel(vec![video(&b, 1), video(&a, 2)]);
        assert_eq!(grouped[0].0.id, "B");
        assert_eq!(grouped[1].0.id, "A");
    }

    #[test]
    fn empty_input_yields_empty_grouping() {
        assert!(group_by_channel(Vec::new()).is_empty());
    }

    #[test]
    fn grouping_is_idempotent_over_equal_inputs() {
        let c1 = channel("C1", 100);
        let c2 = channel("C2", 50);
        let make = || vec![video(&c1, 10), video(&c2, 20), video(&c1, 30)];

        let first = group_by_channel(make());
        let second = group_by_channel(make());

        assert_eq!(first.len(), second.len());
        for (lhs, rhs) in first.iter().zip(&second) {
            assert_eq!(lhs.0.id, rhs.0.id);
            let lhs_views: Vec<u64> = lhs.1.iter().map(|v| v.views).collect();
            let rhs_views: Vec<u64> = rhs.1.iter().map(|v| v.views).collect();
            assert_eq!(lhs_views, rhs_views);
        }
    }
}
