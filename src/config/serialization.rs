//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize the effective config into the template written on first
    /// run and by `bookdesk config --reset`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# bookdesk configuration

# Base URL of the books REST API ("/api/books" is appended).
# Env override: BOOKDESK_API_URL
api_url = "{api_url}"

# Demo mode: run against a built-in in-memory collection, no backend needed.
# Env override: BOOKDESK_DEMO=1
demo = {demo}

# Theme: dark, light
# Env override: BOOKDESK_THEME
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides the level)
[logging]
level = "{log_level}"
# File logging (in addition to the in-TUI log overlay)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"

# Validation messages shown under the form fields
[messages]
name_required = "{name_required}"
name_min = "{name_min}"
name_max = "{name_max}"
description_required = "{description_required}"
description_min = "{description_min}"
description_max = "{description_max}"
price_required = "{price_required}"
price_numeric = "{price_numeric}"
"#,
            api_url = self.api_url,
            demo = self.demo,
            theme = self.theme,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
            name_required = self.messages.name_required,
            name_min = self.messages.name_min,
            name_max = self.messages.name_max,
            description_required = self.messages.description_required,
            description_min = self.messages.description_min,
            description_max = self.messages.description_max,
            price_required = self.messages.price_required,
            price_numeric = self.messages.price_numeric,
        )
    }
}
