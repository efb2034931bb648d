//! App Configuration
//!
//! Resolved once at startup and shared through Leptos context.

use std::time::Duration;

use tracing::Level;

/// localStorage key holding the logged-in user
pub const SESSION_KEY: &str = "loggedNoteappUser";

/// How long an error banner stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

const FALLBACK_API_BASE: &str = "http://localhost:3001/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute URL the `/notes` and `/login` paths hang off
    pub api_base: String,
    pub session_key: String,
    pub notification_ttl: Duration,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            session_key: SESSION_KEY.to_string(),
            notification_ttl: NOTIFICATION_TTL,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Build the config from compile-time overrides and the page origin.
    ///
    /// `NOTEAPP_API_BASE` wins when set; otherwise the API is assumed to be
    /// served from `<origin>/api`.
    pub fn load() -> Self {
        let api_base = match option_env!("NOTEAPP_API_BASE") {
            Some(base) => base.to_string(),
            None => page_origin()
                .map(|origin| format!("{}/api", origin))
                .unwrap_or_else(|| FALLBACK_API_BASE.to_string()),
        };
        Self::from_parts(Some(&api_base), option_env!("NOTEAPP_LOG"))
    }

    fn from_parts(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<Level>().ok()) {
            config.log_level = level;
        }
        config
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session_key, "loggedNoteappUser");
        assert_eq!(config.notification_ttl, Duration::from_millis(5000));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = AppConfig::from_parts(Some("https://notes.example.com/api/"), Some("debug"));
        assert_eq!(config.api_base, "https://notes.example.com/api");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_blank_or_bad_overrides_fall_back() {
        let config = AppConfig::from_parts(Some("  "), Some("loud"));
        assert_eq!(config.api_base, FALLBACK_API_BASE);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_load_without_window_uses_fallback() {
        if option_env!("NOTEAPP_API_BASE").is_none() {
            assert_eq!(AppConfig::load().api_base, FALLBACK_API_BASE);
        }
    }
}
