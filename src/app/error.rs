use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagefeedError {
    /// Navigation failed and the fallback content capture failed too.
    #[error("Render failure for {url}: {reason}")]
    Render { url: String, reason: String },

    #[error("Invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("Feed serialization error: {0}")]
    Feed(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PagefeedError>;
