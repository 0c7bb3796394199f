use log::Level;
use std::cell::RefCell;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "taxdash_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 3000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Running on a local development host
    pub debug_mode: bool,

    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3000,
            api_path: "/api/v1".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn stored(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{STORAGE_PREFIX}{key}"))
        .ok()
        .flatten()
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Settings for the current page: defaults, adjusted for local development
    /// and overridden by `taxdash_*` keys in localStorage.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_storage(&storage);
        }

        settings
    }

    fn apply_storage(&mut self, storage: &Storage) {
        if let Some(api_host) = stored(storage, "api_host") {
            self.api_host = api_host;
        }
        if let Some(port) = stored(storage, "api_port").and_then(|v| v.parse().ok()) {
            self.api_port = port;
        }
        if let Some(api_path) = stored(storage, "api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = stored(storage, "api_use_https") {
            self.api_use_https = use_https.eq_ignore_ascii_case("true");
        }
        if let Some(level) = stored(storage, "log_level").and_then(|v| parse_level(&v)) {
            self.log_level = level;
        }
        if let Some(duration) = stored(storage, "toast_duration_ms").and_then(|v| v.parse().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_url() {
        let settings = AppSettings::default();
        assert_eq!(
            settings.api_url("/datasets"),
            "http://localhost:3000/api/v1/datasets"
        );
    }

    #[test]
    fn https_changes_protocol() {
        let settings = AppSettings {
            api_host: "tax.example.com".to_string(),
            api_port: 443,
            api_use_https: true,
            ..AppSettings::default()
        };
        assert_eq!(settings.api_base_url(), "https://tax.example.com:443/api/v1");
    }

    #[test]
    fn log_levels_are_case_insensitive() {
        assert_eq!(parse_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_level("trace"), Some(Level::Trace));
        assert_eq!(parse_level("loud"), None);
    }
}
