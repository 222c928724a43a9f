use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::NavigateParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tempfile::TempDir;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use crate::app::{PagefeedError, Result};
use crate::domain::{PageSnapshot, RenderRequest};
use crate::renderer::config::RendererConfig;
use crate::renderer::Renderer;

/// True once the target document has left `about:blank` and finished parsing.
const DOM_READY_SCRIPT: &str =
    "document.readyState !== 'loading' && window.location.href !== 'about:blank'";

const DOM_POLL_INTERVAL: Duration = Duration::from_millis(100);

const TEARDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Chrome-based renderer using chromiumoxide
pub struct ChromeRenderer {
    config: RendererConfig,
    semaphore: Arc<Semaphore>,
}

impl ChromeRenderer {
    /// Create a new Chrome renderer with the given configuration
    pub fn new(config: RendererConfig) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
        Self { config, semaphore }
    }

    /// Navigate, wake lazy content and capture the page HTML.
    async fn capture(&self, session: &BrowserSession, request: &RenderRequest) -> Result<PageSnapshot> {
        let url = &request.url;

        let page = session
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| render_failure(url, format!("Failed to create page: {}", e)))?;

        if let Err(e) = page.set_user_agent(&self.config.user_agent).await {
            warn!("Failed to set user agent: {}", e);
        }

        let render_error = match tokio::time::timeout(request.timeout, load_dom(&page, url)).await {
            Ok(Ok(())) => self.trigger_lazy_load(&page).await.err(),
            Ok(Err(e)) => Some(e),
            Err(_) => Some(format!(
                "Navigation timed out after {}s",
                request.timeout.as_secs()
            )),
        };

        let captured = page.content().await.map_err(|e| e.to_string());
        if let Err(e) = page.close().await {
            warn!("Failed to close page for {}: {}", url, e);
        }

        snapshot_from_capture(url, captured, render_error)
    }

    async fn trigger_lazy_load(&self, page: &Page) -> std::result::Result<(), String> {
        page.evaluate(self.config.scroll_script())
            .await
            .map_err(|e| format!("Scroll failed: {}", e))?;

        tokio::time::sleep(self.config.lazy_load_wait()).await;
        Ok(())
    }
}

#[async_trait]
impl Renderer for ChromeRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<PageSnapshot> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| render_failure(&request.url, format!("Semaphore error: {}", e)))?;

        let session = BrowserSession::launch(&self.config)
            .await
            .map_err(|e| render_failure(&request.url, e))?;

        let outcome = self.capture(&session, request).await;
        session.close().await;
        outcome
    }
}

/// A browser process owned by exactly one render.
///
/// `close` shuts it down gracefully. If the session is dropped without it
/// (panic, cancelled future) the `Browser` drop kills the process and the
/// profile directory is removed.
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    _profile: TempDir,
}

impl BrowserSession {
    async fn launch(config: &RendererConfig) -> std::result::Result<Self, String> {
        let profile = tempfile::Builder::new()
            .prefix("pagefeed-profile-")
            .tempdir()
            .map_err(|e| format!("Failed to create browser profile: {}", e))?;

        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer")
            .user_data_dir(profile.path());

        if !config.headless {
            builder = builder.with_head();
        }

        if let Some(ref executable) = config.chrome_executable {
            builder = builder.chrome_executable(executable);
        }

        let browser_config = builder
            .build()
            .map_err(|e| format!("Failed to build browser config: {}", e))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            )
        })?;

        let handler = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {
                // Drive the CDP connection
            }
        });

        Ok(Self {
            browser,
            handler,
            _profile: profile,
        })
    }

    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }

        match tokio::time::timeout(TEARDOWN_TIMEOUT, self.browser.wait()).await {
            Ok(Ok(_)) => debug!("Browser exited"),
            Ok(Err(e)) => warn!("Failed waiting for browser exit: {}", e),
            Err(_) => warn!("Browser did not exit within {:?}", TEARDOWN_TIMEOUT),
        }

        self.handler.abort();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

/// Navigate `page` to `url` and wait until the DOM is parsed.
///
/// Does not wait for subresources or network idle.
async fn load_dom(page: &Page, url: &Url) -> std::result::Result<(), String> {
    let navigation = page
        .execute(NavigateParams::new(url.as_str()))
        .await
        .map_err(|e| format!("Navigation failed: {}", e))?;

    if let Some(ref error_text) = navigation.result.error_text {
        return Err(format!("Navigation failed: {}", error_text));
    }

    loop {
        match page.evaluate(DOM_READY_SCRIPT).await {
            Ok(result) => {
                if result.into_value::<bool>().unwrap_or(false) {
                    return Ok(());
                }
            }
            // the execution context is replaced mid-navigation
            Err(e) => debug!("DOM readiness probe failed, retrying: {}", e),
        }
        tokio::time::sleep(DOM_POLL_INTERVAL).await;
    }
}

fn render_failure(url: &Url, reason: impl Into<String>) -> PagefeedError {
    PagefeedError::Render {
        url: url.to_string(),
        reason: reason.into(),
    }
}

/// Decide the render outcome from the captured HTML and any navigation error.
///
/// A navigation error alone degrades the snapshot; only a failed capture
/// fails the render.
fn snapshot_from_capture(
    url: &Url,
    captured: std::result::Result<String, String>,
    render_error: Option<String>,
) -> Result<PageSnapshot> {
    match (captured, render_error) {
        (Ok(html), None) => {
            info!("Rendered {} ({} bytes)", url, html.len());
            Ok(PageSnapshot::complete(url.clone(), html))
        }
        (Ok(html), Some(e)) => {
            warn!(
                "Scrape warning for {}: {}. Using the {} bytes loaded so far",
                url,
                e,
                html.len()
            );
            Ok(PageSnapshot::degraded(url.clone(), html, e))
        }
        (Err(e), render_error) => Err(render_failure(
            url,
            capture_failure_reason(render_error.as_deref(), &e),
        )),
    }
}

fn capture_failure_reason(render_error: Option<&str>, capture_error: &str) -> String {
    match render_error {
        Some(render_error) => format!(
            "{}; capturing partial content also failed: {}",
            render_error, capture_error
        ),
        None => format!("Content capture failed: {}", capture_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_failure_carries_url() {
        let url = Url::parse("https://example.com/page").unwrap();
        let err = render_failure(&url, "boom");
        assert!(matches!(
            err,
            PagefeedError::Render { ref url, ref reason } if url == "https://example.com/page" && reason == "boom"
        ));
    }

    #[test]
    fn test_capture_failure_reason_mentions_both_causes() {
        let reason = capture_failure_reason(Some("Navigation timed out after 30s"), "target crashed");
        assert!(reason.contains("timed out"));
        assert!(reason.contains("target crashed"));

        let reason = capture_failure_reason(None, "target crashed");
        assert_eq!(reason, "Content capture failed: target crashed");
    }

    fn page_url() -> Url {
        Url::parse("https://news.example/").unwrap()
    }

    #[test]
    fn test_clean_load_gives_complete_snapshot() {
        let snapshot =
            snapshot_from_capture(&page_url(), Ok("<html>full</html>".into()), None).unwrap();
        assert!(!snapshot.is_degraded());
        assert_eq!(snapshot.source_url, page_url());
        assert_eq!(snapshot.html, "<html>full</html>");
    }

    #[test]
    fn test_timeout_gives_degraded_snapshot() {
        let snapshot = snapshot_from_capture(
            &page_url(),
            Ok("<html><article>partial".into()),
            Some("Navigation timed out after 30s".into()),
        )
        .unwrap();
        assert!(snapshot.is_degraded());
        assert_eq!(snapshot.html, "<html><article>partial");
        assert_eq!(
            snapshot.render_error.as_deref(),
            Some("Navigation timed out after 30s")
        );
    }

    #[test]
    fn test_navigation_error_gives_degraded_snapshot() {
        let snapshot = snapshot_from_capture(
            &page_url(),
            Ok("<html></html>".into()),
            Some("Navigation failed: net::ERR_NAME_NOT_RESOLVED".into()),
        )
        .unwrap();
        assert!(snapshot.is_degraded());
    }

    #[test]
    fn test_failed_capture_after_timeout_is_render_failure() {
        let err = snapshot_from_capture(
            &page_url(),
            Err("target crashed".into()),
            Some("Navigation timed out after 30s".into()),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PagefeedError::Render { ref url, ref reason }
                if url == "https://news.example/" && reason.contains("timed out") && reason.contains("target crashed")
        ));
    }

    #[test]
    fn test_failed_capture_after_clean_load_is_render_failure() {
        let err = snapshot_from_capture(&page_url(), Err("target crashed".into()), None).unwrap_err();
        assert!(matches!(
            err,
            PagefeedError::Render { ref reason, .. } if reason == "Content capture failed: target crashed"
        ));
    }

    #[test]
    fn test_concurrency_floor_of_one() {
        let renderer = ChromeRenderer::new(RendererConfig {
            max_concurrency: 0,
            ..Default::default()
        });
        assert_eq!(renderer.semaphore.available_permits(), 1);
    }

    #[tokio::test]
    #[ignore = "requires Chrome or Chromium"]
    async fn test_renders_inline_page() {
        let url = Url::parse(
            "data:text/html,<article><h2>Hello</h2><a href='/x'>x</a></article>",
        )
        .unwrap();
        let renderer = ChromeRenderer::new(RendererConfig {
            lazy_load_wait_ms: 50,
            ..Default::default()
        });

        let snapshot = renderer.render(&RenderRequest::new(url)).await.unwrap();
        assert!(!snapshot.is_degraded());
        assert!(snapshot.html.contains("<h2>Hello</h2>"));
    }

    #[tokio::test]
    #[ignore = "requires Chrome or Chromium"]
    async fn test_slow_page_degrades_instead_of_failing() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><h2>late</h2></body></html>")
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let renderer = ChromeRenderer::new(RendererConfig {
            lazy_load_wait_ms: 50,
            ..Default::default()
        });
        let request = RenderRequest::new(Url::parse(&server.uri()).unwrap())
            .with_timeout(Duration::from_secs(1));

        let snapshot = renderer.render(&request).await.unwrap();
        assert!(snapshot.is_degraded());
        assert!(snapshot
            .render_error
            .as_deref()
            .is_some_and(|e| e.contains("timed out")));
    }
}
