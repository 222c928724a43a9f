//! # pagefeed
//!
//! Turns an arbitrary web page into an RSS feed. The page is rendered in a
//! headless browser, two CSS selectors pick the repeated item blocks and the
//! title inside each, and the result is serialized as RSS 2.0.
//!
//! ## Architecture
//!
//! ```text
//! Renderer → Extractor → Resolver → Builder → RSS bytes
//! ```
//!
//! - [`renderer`]: headless Chrome rendering with best-effort capture on timeout
//! - [`extractor`]: selector-driven item extraction, capped at 20 entries
//! - [`resolver`]: relative href resolution against the page URL
//! - [`builder`]: RSS 2.0 channel assembly and serialization
//! - [`pipeline`]: the stateless per-request pipeline wiring the above
//!
//! ## Quick Start
//!
//! ```bash
//! # Feed from a news front page
//! pagefeed feed https://news.example/ --item article --title h2
//!
//! # Check what the selectors pick up
//! pagefeed items https://news.example/ --item article --title h2
//!
//! # Raw markup for picking selectors
//! pagefeed preview https://news.example/ -o page.html
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires configuration into the
/// pipeline and the preview fetcher.
pub mod app;

/// RSS 2.0 feed assembly.
pub mod builder;

/// Command-line interface using clap.
///
/// - `feed <url> --item <css> --title <css>` - Print the generated feed
/// - `items <url> --item <css> --title <css>` - Print extracted entries as JSON
/// - `preview <url>` - Print raw markup for selector picking
pub mod cli;

/// Configuration loaded from `~/.config/pagefeed/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`RenderRequest`](domain::RenderRequest) / [`PageSnapshot`](domain::PageSnapshot): renderer input and output
/// - [`ExtractedItem`](domain::ExtractedItem): one (title, link) entry
/// - [`FeedDocument`](domain::FeedDocument): channel metadata plus at most 20 entries
pub mod domain;

pub mod extractor;

/// Plain HTTP markup fetching for previews.
pub mod fetcher;

pub mod pipeline;

/// Markup preparation for the selector-picking preview.
pub mod preview;

/// Headless browser rendering.
///
/// - [`ChromeRenderer`](renderer::ChromeRenderer): chromiumoxide-based renderer
/// - [`RendererConfig`](renderer::RendererConfig): configuration options
/// - [`Renderer`](renderer::Renderer): async trait for rendering implementations
pub mod renderer;

pub mod resolver;
