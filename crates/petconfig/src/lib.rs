use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration loaded from `petman.toml`.
///
/// Every field has a default so a missing or empty file yields the stock
/// appearance (the blue backdrop with the bundled banner images).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Backdrop fill behind and between the banners, as `#rrggbb` or `#rrggbbaa`.
    #[serde(default = "default_background")]
    pub background: String,
    /// Banner image filenames, resolved against the assets directory.
    #[serde(default = "default_top_image")]
    pub top_image: PathBuf,
    #[serde(default = "default_bottom_image")]
    pub bottom_image: PathBuf,
    #[serde(default = "default_icon")]
    pub icon: PathBuf,
    /// Quiet period between a resize notification and the relayout it triggers.
    #[serde(
        default = "default_debounce",
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration"
    )]
    pub debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            window: WindowConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            top_image: default_top_image(),
            bottom_image: default_bottom_image(),
            icon: default_icon(),
            debounce: default_debounce(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_title() -> String {
    "PetManager".to_string()
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    700
}

fn default_background() -> String {
    "#3058af".to_string()
}

fn default_top_image() -> PathBuf {
    PathBuf::from("background_top.png")
}

fn default_bottom_image() -> PathBuf {
    PathBuf::from("background_bottom.png")
}

fn default_icon() -> PathBuf {
    PathBuf::from("icon.png")
}

fn default_debounce() -> Duration {
    Duration::from_millis(10)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;
    impl<'de> de::Visitor<'de> for Visitor {
        type Value = Duration;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a duration in milliseconds or a human-readable string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            humantime::parse_duration(v)
                .map_err(|err| E::custom(format!("invalid duration '{v}': {err}")))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Duration::from_millis(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("duration must be non-negative"));
            }
            Ok(Duration::from_millis(v as u64))
        }
    }

    deserializer.deserialize_any(Visitor)
}

fn serialize_duration<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&humantime::format_duration(*value))
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: AppConfig = toml::from_str(input)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 1 {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {}; expected 1",
                self.version
            )));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be at least 1x1",
                self.window.width, self.window.height
            )));
        }

        if self.window.title.trim().is_empty() {
            return Err(ConfigError::Invalid("window title may not be empty".into()));
        }

        validate_hex_color(&self.theme.background)?;

        for (field, path) in [
            ("theme.top_image", &self.theme.top_image),
            ("theme.bottom_image", &self.theme.bottom_image),
            ("theme.icon", &self.theme.icon),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} may not be empty")));
            }
        }

        Ok(())
    }
}

fn validate_hex_color(raw: &str) -> Result<(), ConfigError> {
    let digits = raw.strip_prefix('#').ok_or_else(|| {
        ConfigError::Invalid(format!("color '{raw}' must start with '#'"))
    })?;

    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ConfigError::Invalid(format!(
            "color '{raw}' must be #rrggbb or #rrggbbaa"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
version = 1

[window]
title = "PetManager"
width = 1280
height = 800

[theme]
background = "#3058af"
top_image = "banners/top.png"
bottom_image = "banners/bottom.png"
debounce = "25ms"
"##;

    #[test]
    fn parses_sample_config() {
        let config = AppConfig::from_toml_str(SAMPLE).expect("parse config");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.theme.background, "#3058af");
        assert_eq!(config.theme.debounce, Duration::from_millis(25));
        assert_eq!(config.theme.top_image, PathBuf::from("banners/top.png"));
    }

    #[test]
    fn empty_input_yields_defaults() {
        let config = AppConfig::from_toml_str("").expect("defaults");
        assert_eq!(config.window.title, "PetManager");
        assert_eq!(config.window.width, 1000);
        assert_eq!(config.window.height, 700);
        assert_eq!(config.theme.debounce, Duration::from_millis(10));
        assert_eq!(config.theme.icon, PathBuf::from("icon.png"));
    }

    #[test]
    fn numeric_debounce_is_milliseconds() {
        let config = AppConfig::from_toml_str("[theme]\ndebounce = 40\n").unwrap();
        assert_eq!(config.theme.debounce, Duration::from_millis(40));
    }

    #[test]
    fn serialised_config_round_trips() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        let rendered = toml::to_string(&config).expect("render config");
        // The debounce serialises as a humantime string, not a secs/nanos map.
        assert!(rendered.contains("debounce = \"25ms\""));

        let back = AppConfig::from_toml_str(&rendered).expect("reparse rendered config");
        assert_eq!(back.theme.debounce, config.theme.debounce);
        assert_eq!(back.window.width, config.window.width);
    }

    #[test]
    fn rejects_unsupported_version() {
        let err = AppConfig::from_toml_str("version = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_window_size() {
        let err = AppConfig::from_toml_str("[window]\nwidth = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_color() {
        let err = AppConfig::from_toml_str("[theme]\nbackground = \"3058af\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AppConfig::from_toml_str("[theme]\nbackground = \"#30xyaf\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
