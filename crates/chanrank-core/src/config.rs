use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let youtube_api_key = require("YOUTUBE_API_KEY")?;
    let log_level = or_default("CHANRANK_LOG_LEVEL", "info");
    let games_path = PathBuf::from(or_default("CHANRANK_GAMES_PATH", "./_games.txt"));
    let request_timeout_secs = parse_u64("CHANRANK_REQUEST_TIMEOUT_SECS", "30")?;
    let default_max_videos = parse_u32("CHANRANK_DEFAULT_MAX_VIDEOS", "3")?;

    Ok(AppConfig {
        youtube_api_key,
        log_level,
        games_path,
        request_timeout_secs,
        default_max_videos,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("YOUTUBE_API_KEY", "test-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "YOUTUBE_API_KEY"),
            "expected MissingEnvVar(YOUTUBE_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.youtube_api_key, "test-key");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.games_path.to_string_lossy(), "./_games.txt");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.default_max_videos, 3);
    }

    #[test]
    fn games_path_override() {
        let mut map = full_env();
        map.insert("CHANRANK_GAMES_PATH", "/tmp/games.txt");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.games_path.to_string_lossy(), "/tmp/games.txt");
    }

    #[test]
    fn request_timeout_secs_override() {
        let mut map = full_env();
        map.insert("CHANRANK_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn request_timeout_secs_invalid() {
        let mut map = full_env();
        map.insert("CHANRANK_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CHANRANK_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CHANRANK_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn default_max_videos_override() {
        let mut map = full_env();
        map.insert("CHANRANK_DEFAULT_MAX_VIDEOS", "10");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.default_max_videos, 10);
    }

    #[test]
    fn default_max_videos_invalid() {
        let mut map = full_env();
        map.insert("CHANRANK_DEFAULT_MAX_VIDEOS", "three");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CHANRANK_DEFAULT_MAX_VIDEOS"),
            "expected InvalidEnvVar(CHANRANK_DEFAULT_MAX_VIDEOS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-key"), "api key leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
