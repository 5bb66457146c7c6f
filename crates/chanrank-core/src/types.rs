//! Domain records: channels and the videos they publish.
//!
//! The `Display` impls are the canonical line formats shared by the console
//! report and the text report, so changing them changes user-visible output.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A content publisher, identified by its provider-assigned channel id.
///
/// `title` and `subscribers` are snapshots taken the first time the channel
/// is seen during a run and are never refreshed on later sightings.
#[derive(Debug, Clone)]
pub struct Channel {
    pub id: String,
    pub title: String,
    pub subscribers: u64,
}

impl Channel {
    /// Canonical channel URL, derived from the id.
    #[must_use]
    pub fn link(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.id)
    }
}

/// Two `Channel` values are the same channel iff their ids are equal, even
/// when they were constructed separately with differing snapshots.
impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} subs) | {}", self.title, self.subscribers, self.link())
    }
}

/// One discovered video with the view count it had at discovery time.
///
/// The channel is shared, not owned: every video from the same channel holds
/// a clone of the same `Arc` handed out by the identity cache.
#[derive(Debug, Clone)]
pub struct Video {
    pub channel: Arc<Channel>,
    pub title: String,
    pub views: u64,
    pub url: String,
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} views | {} | {}", self.views, self.title, self.url)
    }
}
