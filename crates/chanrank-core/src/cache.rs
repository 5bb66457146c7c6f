//! Run-scoped channel identity cache.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::types::Channel;

/// Deduplicates channel identities across searches within one run.
///
/// Keyed by the provider-assigned channel id. Guarantees at most one
/// subscriber-count lookup per distinct id for the cache's lifetime.
/// Entries are never evicted; the cache is dropped with the run, so
/// unbounded growth is acceptable here.
#[derive(Debug, Default)]
pub struct ChannelCache {
    channels: HashMap<String, Arc<Channel>>,
}

impl ChannelCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached identity for `id`, or builds and caches one.
    ///
    /// On first sight of `id`, `fetch_subscribers` is invoked exactly once;
    /// a `None` count (statistics unavailable or hidden) is recorded as 0.
    /// On later sightings the cached value is returned unchanged and
    /// `fetch_subscribers` is not called, so a `title` from a later search
    /// hit never overwrites the first snapshot.
    ///
    /// # Errors
    ///
    /// Propagates whatever `fetch_subscribers` returns. No entry is cached
    /// for `id` in that case, so a later call would trigger a fresh lookup.
    pub async fn resolve<F, Fut, E>(
        &mut self,
        id: &str,
        title: &str,
        fetch_subscribers: F,
    ) -> Result<Arc<Channel>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<u64>, E>>,
    {
        if let Some(existing) = self.channels.get(id) {
            return Ok(Arc::clone(existing));
        }

        let subscribers = fetch_subscribers().await?.unwrap_or(0);
        let channel = Arc::new(Channel {
            id: id.to_owned(),
            title: title.to_owned(),
            subscribers,
        });
        self.channels.insert(id.to_owned(), Arc::clone(&channel));
        Ok(channel)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
