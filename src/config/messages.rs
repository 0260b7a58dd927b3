//! Validation message set
//!
//! The strings shown under form fields when validation fails. The
//! defaults keep the Indonesian wording of the original backend; every
//! string can be overridden from the `[messages]` config section.

use serde::Deserialize;

/// Human-readable validation messages, keyed by rule
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    pub name_required: String,
    pub name_min: String,
    pub name_max: String,
    pub description_required: String,
    pub description_min: String,
    pub description_max: String,
    pub price_required: String,
    pub price_numeric: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            name_required: "Nama buku tidak boleh kosong".to_string(),
            name_min: "Nama buku minimal 4 karakter!".to_string(),
            name_max: "Nama buku maksimal 100 karakter!".to_string(),
            description_required: "Deskripsi tidak boleh kosong".to_string(),
            description_min: "Deskripsi minimal 10 karakter!".to_string(),
            description_max: "Deskripsi maksimal 150 karakter!".to_string(),
            price_required: "Harga tidak boleh kosong".to_string(),
            price_numeric: "Harga harus berupa angka!".to_string(),
        }
    }
}

/// Message overrides as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMessages {
    pub name_required: Option<String>,
    pub name_min: Option<String>,
    pub name_max: Option<String>,
    pub description_required: Option<String>,
    pub description_min: Option<String>,
    pub description_max: Option<String>,
    pub price_required: Option<String>,
    pub price_numeric: Option<String>,
}

impl Messages {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileMessages>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            name_required: file.name_required.unwrap_or(defaults.name_required),
            name_min: file.name_min.unwrap_or(defaults.name_min),
            name_max: file.name_max.unwrap_or(defaults.name_max),
            description_required: file
                .description_required
                .unwrap_or(defaults.description_required),
            description_min: file.description_min.unwrap_or(defaults.description_min),
            description_max: file.description_max.unwrap_or(defaults.description_max),
            price_required: file.price_required.unwrap_or(defaults.price_required),
            price_numeric: file.price_numeric.unwrap_or(defaults.price_numeric),
        }
    }
}
