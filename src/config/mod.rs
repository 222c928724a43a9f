//! Configuration management for pagefeed.
//!
//! Configuration is read from `~/.config/pagefeed/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod feed;
pub mod preview;

pub use feed::FeedConfig;
pub use preview::PreviewConfig;

use crate::renderer::RendererConfig;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub renderer: RendererConfig,
    pub feed: FeedConfig,
    pub preview: PreviewConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/pagefeed/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("pagefeed").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# pagefeed configuration

[renderer]
# Run the browser without a visible window
headless = true

# Navigation timeout in seconds; on expiry whatever HTML loaded is used
timeout_secs = 30

# Vertical scroll offset (pixels) applied after load to wake lazy content
scroll_offset_px = 800

# Pause after scrolling, in milliseconds
lazy_load_wait_ms = 1000

# Maximum browsers open at the same time
max_concurrency = 4

# User agent presented to sites
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"

# Explicit Chrome/Chromium binary (default: auto-detect)
# chrome_executable = "/usr/bin/chromium"

[feed]
# Channel title is this prefix followed by the page URL
title_prefix = "RSS Feed: "
description = "Generated via pagefeed"

# Indent the XML output
pretty = true

# Entries carry no publish date unless this is enabled, in which case
# every entry is stamped with the scrape time
stamp_scrape_time = false

[preview]
timeout_secs = 15
user_agent = "Mozilla/5.0"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.renderer, RendererConfig::default());
        assert_eq!(config.feed, FeedConfig::default());
        assert_eq!(config.preview, PreviewConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[renderer]
timeout_secs = 10

[feed]
stamp_scrape_time = true
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.renderer.timeout_secs, 10);
        assert_eq!(config.renderer.scroll_offset_px, 800);
        assert!(config.feed.stamp_scrape_time);
        assert_eq!(config.feed.title_prefix, "RSS Feed: ");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.renderer.timeout_secs, 30);
        assert_eq!(config.preview.timeout_secs, 15);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[feed]\ndescription = \"from disk\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.feed.description, "from disk");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[renderer]\ntimeout_secs = \"soon\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_create_default_config_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::create_default_config(&path).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.renderer.headless);
    }
}
