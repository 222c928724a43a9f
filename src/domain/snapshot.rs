use std::time::Duration;

use url::Url;

/// Navigation timeout applied when a caller does not pick one.
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub url: Url,
    pub timeout: Duration,
}

impl RenderRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTML captured from a rendered page.
///
/// `html` may be partial: when navigation failed or timed out the renderer
/// still captures whatever the page held and records the cause in
/// `render_error`.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub source_url: Url,
    pub html: String,
    pub render_error: Option<String>,
}

impl PageSnapshot {
    pub fn complete(source_url: Url, html: String) -> Self {
        Self {
            source_url,
            html,
            render_error: None,
        }
    }

    pub fn degraded(source_url: Url, html: String, error: impl Into<String>) -> Self {
        Self {
            source_url,
            html,
            render_error: Some(error.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.render_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_thirty_seconds() {
        let req = RenderRequest::new(Url::parse("https://example.com/").unwrap());
        assert_eq!(req.timeout, Duration::from_secs(30));

        let req = req.with_timeout(Duration::from_secs(5));
        assert_eq!(req.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_degraded_snapshot_keeps_html() {
        let url = Url::parse("https://example.com/").unwrap();
        let snap = PageSnapshot::degraded(url.clone(), "<p>partial".into(), "timed out");
        assert!(snap.is_degraded());
        assert_eq!(snap.html, "<p>partial");
        assert_eq!(snap.render_error.as_deref(), Some("timed out"));

        assert!(!PageSnapshot::complete(url, String::new()).is_degraded());
    }
}
