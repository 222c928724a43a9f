use serde::{Deserialize, Serialize};
use url::Url;

/// A single entry lifted out of a page: the title text and the absolute link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub title: String,
    pub link: Url,
}

impl ExtractedItem {
    pub fn new(title: impl Into<String>, link: Url) -> Self {
        Self {
            title: title.into(),
            link,
        }
    }

    /// Identifier used as the feed entry GUID.
    ///
    /// Tied to the link so re-scraping an unchanged page yields the same
    /// identities across runs.
    pub fn guid(&self) -> &str {
        self.link.as_str()
    }
}
