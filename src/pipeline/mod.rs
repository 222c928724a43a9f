//! The render → extract → resolve → build pipeline behind every feed request.
//!
//! ```text
//! (url, item selector, title selector)
//!     → ItemQuery::compile   (SelectorError)
//!     → Renderer::render     (RenderFailure, or a degraded snapshot)
//!     → ItemQuery::extract   (items without title or link skipped)
//!     → FeedBuilder::render  → RSS bytes
//! ```
//!
//! Each call is independent; nothing is cached or shared between requests.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use url::Url;

use crate::app::Result;
use crate::builder::FeedBuilder;
use crate::domain::{ExtractedItem, RenderRequest, DEFAULT_RENDER_TIMEOUT};
use crate::extractor::ItemQuery;
use crate::renderer::Renderer;

pub struct FeedPipeline {
    renderer: Arc<dyn Renderer>,
    builder: FeedBuilder,
    render_timeout: Duration,
}

impl FeedPipeline {
    pub fn new(renderer: Arc<dyn Renderer>, builder: FeedBuilder) -> Self {
        Self {
            renderer,
            builder,
            render_timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }

    pub fn with_render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = timeout;
        self
    }

    /// Render `source_url` and extract its entries.
    ///
    /// Selectors are compiled before the browser starts, so a malformed one
    /// fails without rendering anything.
    pub async fn extract_items(
        &self,
        source_url: &Url,
        item_selector: &str,
        title_selector: &str,
    ) -> Result<Vec<ExtractedItem>> {
        let query = ItemQuery::compile(item_selector, title_selector)?;

        let request = RenderRequest::new(source_url.clone()).with_timeout(self.render_timeout);
        let snapshot = self.renderer.render(&request).await?;

        Ok(query.extract(&snapshot))
    }

    /// Produce the serialized feed for `source_url`.
    ///
    /// Zero matching items is a valid, empty feed.
    pub async fn generate_feed(
        &self,
        source_url: &Url,
        item_selector: &str,
        title_selector: &str,
    ) -> Result<Vec<u8>> {
        let items = self
            .extract_items(source_url, item_selector, title_selector)
            .await?;
        let count = items.len();

        let bytes = self.builder.render(source_url, items)?;
        info!("Generated feed for {} with {} entries", source_url, count);
        Ok(bytes)
    }
}
