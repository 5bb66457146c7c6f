//! Domain model and aggregation engine for chanrank.
//!
//! Everything in this crate is in-memory and free of I/O: the channel
//! identity cache, per-game grouping, the cross-game aggregator, and the
//! ranking that orders the final report. HTTP lives in `chanrank-youtube`;
//! console and file output live in the CLI.

pub mod aggregate;
pub mod app_config;
pub mod cache;
pub mod config;
pub mod group;
pub mod rank;
pub mod types;

pub use aggregate::{merge_game, ChannelCoverage};
pub use app_config::AppConfig;
pub use cache::ChannelCache;
pub use config::{load_app_config, load_app_config_from_env};
pub use group::group_by_channel;
pub use rank::{rank_channels, rank_videos};
pub use types::{Channel, Video};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
