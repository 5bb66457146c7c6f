use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub log_level: String,
    pub games_path: PathBuf,
    pub request_timeout_secs: u64,
    pub default_max_videos: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("youtube_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("games_path", &self.games_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("default_max_videos", &self.default_max_videos)
            .finish()
    }
}
