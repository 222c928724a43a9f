use serde::{Deserialize, Serialize};

/// Channel metadata and serialization options for generated feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Prepended to the source URL to form the channel title
    pub title_prefix: String,

    /// Channel description identifying the generator
    pub description: String,

    /// Indent the XML output (default: true)
    pub pretty: bool,

    /// Stamp every entry with the scrape time as its publish date (default: false)
    pub stamp_scrape_time: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title_prefix: "RSS Feed: ".to_string(),
            description: "Generated via pagefeed".to_string(),
            pretty: true,
            stamp_scrape_time: false,
        }
    }
}
