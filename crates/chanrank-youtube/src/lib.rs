//! Async client for the YouTube Data API v3.
//!
//! Covers the three endpoints chanrank needs: `search` for per-game video
//! discovery, `videos` for view counts, and `channels` for subscriber
//! counts. Missing or hidden statistics are surfaced as `None`, never as
//! errors — deciding what "no data" means is the caller's job.

mod client;
mod error;
pub mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
