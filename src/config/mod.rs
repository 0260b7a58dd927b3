//! Configuration for the books client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/bookdesk/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;

mod logging;
mod messages;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use messages::{FileMessages, Messages};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the books REST API (the `/api/books` prefix is appended)
    pub api_url: String,

    /// Demo mode: serve the UI from an in-memory collection, no backend
    pub demo: bool,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Validation message set shown under form fields
    pub messages: Messages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            demo: false,
            theme: "dark".to_string(),
            logging: LoggingConfig::default(),
            messages: Messages::default(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub demo: Option<bool>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [messages] section
    pub messages: Option<FileMessages>,
}

impl Config {
    /// Get the config file path: ~/.config/bookdesk/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("bookdesk").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// A broken config fails fast with a clear error instead of silently
    /// falling back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `bookdesk config --reset` or delete the file.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Config file doesn't exist - use defaults
                FileConfig::default()
            }
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        // API base URL: env > file > default
        let api_url = std::env::var("BOOKDESK_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Demo mode: env > file > default
        let demo = std::env::var("BOOKDESK_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .ok()
            .or(file.demo)
            .unwrap_or(false);

        // Theme: env > file > default
        let theme = std::env::var("BOOKDESK_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = LoggingConfig::from_file(file.logging);
        let messages = Messages::from_file(file.messages);

        Self {
            api_url,
            demo,
            theme,
            logging,
            messages,
        }
    }
}
