use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the headless browser renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Navigation timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// Vertical scroll offset applied after load, in pixels (default: 800)
    pub scroll_offset_px: u32,

    /// Pause after scrolling for lazy-loaded content in milliseconds (default: 1000)
    pub lazy_load_wait_ms: u64,

    /// Maximum browsers running at once (default: 4)
    pub max_concurrency: usize,

    /// User agent string presented to sites
    pub user_agent: String,

    /// Chrome/Chromium binary to launch instead of the auto-detected one
    pub chrome_executable: Option<PathBuf>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            headless: true,
            timeout_secs: 30,
            scroll_offset_px: 800,
            lazy_load_wait_ms: 1000,
            max_concurrency: 4,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"
                .to_string(),
            chrome_executable: None,
        }
    }
}

impl RendererConfig {
    /// Get the navigation timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the post-scroll pause as a Duration
    pub fn lazy_load_wait(&self) -> Duration {
        Duration::from_millis(self.lazy_load_wait_ms)
    }

    /// JavaScript that performs the lazy-load scroll
    pub fn scroll_script(&self) -> String {
        format!("window.scrollTo(0, {})", self.scroll_offset_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = RendererConfig::default();
        assert!(config.headless);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.scroll_offset_px, 800);
        assert_eq!(config.lazy_load_wait_ms, 1000);
        assert_eq!(config.max_concurrency, 4);
        assert!(config.user_agent.contains("Chrome/122"));
        assert!(config.chrome_executable.is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = RendererConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));

        let short = RendererConfig {
            timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(short.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_lazy_load_wait_duration() {
        let config = RendererConfig::default();
        assert_eq!(config.lazy_load_wait(), Duration::from_millis(1000));
    }

    #[test]
    fn test_scroll_script() {
        let config = RendererConfig {
            scroll_offset_px: 1200,
            ..Default::default()
        };
        assert_eq!(config.scroll_script(), "window.scrollTo(0, 1200)");
    }
}
