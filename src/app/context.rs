use std::sync::Arc;

use crate::app::error::Result;
use crate::builder::FeedBuilder;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::pipeline::FeedPipeline;
use crate::renderer::{ChromeRenderer, Renderer};

/// Wires configuration into the feed pipeline and the preview fetcher.
pub struct AppContext {
    pub config: Config,
    pub pipeline: FeedPipeline,
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let renderer: Arc<dyn Renderer> = Arc::new(ChromeRenderer::new(config.renderer.clone()));
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config.preview)?);
        Ok(Self::with_parts(config, renderer, fetcher))
    }

    /// Build a context around caller-supplied renderer and fetcher.
    pub fn with_parts(
        config: Config,
        renderer: Arc<dyn Renderer>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        let pipeline = FeedPipeline::new(renderer, FeedBuilder::new(config.feed.clone()))
            .with_render_timeout(config.renderer.timeout());

        Self {
            config,
            pipeline,
            fetcher,
        }
    }
}
