//! Page rendering through a headless browser.
//!
//! Each render launches its own short-lived browser with a throwaway
//! profile, navigates, nudges lazy-loaded content with a scroll, and captures
//! the DOM as HTML.
//!
//! # Architecture
//!
//! ```text
//! RenderRequest → launch browser → navigate (timeout) → scroll + pause → capture → PageSnapshot
//! ```
//!
//! A navigation error or timeout is not fatal: whatever HTML the page holds
//! at that point is captured and returned as a degraded snapshot. Only a
//! failed capture surfaces as [`PagefeedError::Render`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use pagefeed::domain::RenderRequest;
//! use pagefeed::renderer::{ChromeRenderer, Renderer, RendererConfig};
//!
//! let renderer = ChromeRenderer::new(RendererConfig::default());
//! let snapshot = renderer.render(&RenderRequest::new(url)).await?;
//! ```
//!
//! [`PagefeedError::Render`]: crate::app::PagefeedError::Render

mod chrome;
mod config;

pub use chrome::ChromeRenderer;
pub use config::RendererConfig;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{PageSnapshot, RenderRequest};

/// Trait for page rendering implementations
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render `request.url` and capture its HTML.
    ///
    /// Implementations hold no state between calls.
    async fn render(&self, request: &RenderRequest) -> Result<PageSnapshot>;
}
