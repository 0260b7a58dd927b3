//! Configuration tests
//!
//! Guards the TOML template against drifting out of sync with the
//! deserialization layer: every field the template writes must parse back.

use super::*;

/// Verify that the serialized default config can be parsed back.
#[test]
fn default_config_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Every value written by the template must survive the round trip.
#[test]
fn round_trip_preserves_values() {
    let mut config = Config::default();
    config.api_url = "http://books.internal:9000".to_string();
    config.demo = true;
    config.theme = "light".to_string();
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.messages.name_min = "Judul terlalu pendek!".to_string();

    let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("template parses");

    assert_eq!(parsed.api_url.as_deref(), Some("http://books.internal:9000"));
    assert_eq!(parsed.demo, Some(true));
    assert_eq!(parsed.theme.as_deref(), Some("light"));

    let logging = LoggingConfig::from_file(parsed.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);

    let messages = Messages::from_file(parsed.messages);
    assert_eq!(messages.name_min, "Judul terlalu pendek!");
    // Untouched messages keep their defaults
    assert_eq!(messages.price_required, Messages::default().price_required);
}

#[test]
fn log_rotation_parses_known_values_and_defaults() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("DAILY"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn messages_default_to_indonesian_set() {
    let messages = Messages::from_file(None);
    assert_eq!(messages.name_min, "Nama buku minimal 4 karakter!");
    assert_eq!(messages.price_required, "Harga tidak boleh kosong");
}
