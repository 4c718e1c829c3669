//! Configuration loading for Keepsake.
//!
//! A `keepsake.toml` in the working directory wins over
//! `~/.keepsake/config.toml`. With no config present the built-in demo
//! content is used so the app always starts.

use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

use keepsake_types::HexColor;

const fn default_max_attempts() -> u32 {
    3
}

#[derive(Debug, Default, Deserialize)]
pub struct KeepsakeConfig {
    pub gate: Option<GateConfig>,
    #[serde(default)]
    pub photos: Vec<PhotoConfig>,
    pub message: Option<String>,
    pub theme: Option<ThemeConfig>,
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
pub struct GateConfig {
    /// The 4-digit secret. Validated into a `SecretPin` at app construction.
    pub pin: String,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Shown after the attempt ceiling is reached. Never blocks further tries.
    pub hint: Option<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            pin: "0908".to_string(),
            max_attempts: default_max_attempts(),
            hint: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoConfig {
    pub filename: String,
    pub alt: Option<String>,
}

/// Named theme colors, `#RRGGBB`. Anything unset falls back to the default
/// palette.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeConfig {
    pub primary: Option<HexColor>,
    pub accent: Option<HexColor>,
    pub deep: Option<HexColor>,
    pub background: Option<HexColor>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for cards, hearts, and confetti.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable entry animations and the confetti burst.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl KeepsakeConfig {
    /// `~/.keepsake/config.toml`, if a home directory can be determined.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".keepsake").join("config.toml"))
    }

    /// Load the first config found, or `None` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let mut candidates = vec![PathBuf::from("keepsake.toml")];
        if let Some(home) = Self::path() {
            candidates.push(home);
        }
        for candidate in candidates {
            if candidate.exists() {
                return Self::load_file(&candidate).map(Some);
            }
        }
        Ok(None)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in demo content used when no config file is present.
    #[must_use]
    pub fn demo() -> Self {
        let photos = ["sunrise.jpg", "picnic.jpg", "boardwalk.jpg", "lanterns.jpg"]
            .into_iter()
            .map(|filename| PhotoConfig {
                filename: filename.to_string(),
                alt: None,
            })
            .collect();
        Self {
            gate: Some(GateConfig::default()),
            photos,
            message: Some(
                "Dear friend,\n\nYou found the demo message. Drop a keepsake.toml \
                 next to the binary to make this gallery your own.\n\nWith love,\nKeepsake"
                    .to_string(),
            ),
            theme: None,
            app: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, KeepsakeConfig};
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_a_full_config() {
        let file = write_config(
            r##"
            message = "line one\n\nline two"

            [gate]
            pin = "1234"
            max_attempts = 5
            hint = "our anniversary"

            [[photos]]
            filename = "a.jpg"
            alt = "first"

            [[photos]]
            filename = "b.jpg"

            [theme]
            primary = "#A8D8FF"
            accent = "#7FB8FF"

            [app]
            reduced_motion = true
            "##,
        );
        let config = KeepsakeConfig::load_file(file.path()).unwrap();
        let gate = config.gate.unwrap();
        assert_eq!(gate.pin, "1234");
        assert_eq!(gate.max_attempts, 5);
        assert_eq!(gate.hint.as_deref(), Some("our anniversary"));
        assert_eq!(config.photos.len(), 2);
        assert_eq!(config.photos[1].filename, "b.jpg");
        assert!(config.theme.unwrap().primary.is_some());
        assert!(config.app.unwrap().reduced_motion);
    }

    #[test]
    fn max_attempts_defaults_to_three() {
        let file = write_config("[gate]\npin = \"0908\"\n");
        let config = KeepsakeConfig::load_file(file.path()).unwrap();
        assert_eq!(config.gate.unwrap().max_attempts, 3);
    }

    #[test]
    fn parse_errors_carry_the_path() {
        let file = write_config("[gate\npin=");
        let err = KeepsakeConfig::load_file(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            ConfigError::Read { .. } => panic!("expected a parse error"),
        }
    }

    #[test]
    fn bad_theme_color_is_a_parse_error() {
        let file = write_config("[theme]\nprimary = \"not-a-color\"\n");
        assert!(KeepsakeConfig::load_file(file.path()).is_err());
    }

    #[test]
    fn demo_config_is_complete() {
        let demo = KeepsakeConfig::demo();
        assert!(demo.gate.is_some());
        assert!(!demo.photos.is_empty());
        assert!(demo.message.is_some());
    }
}
