pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "pagefeed")]
#[command(about = "Turn any web page into an RSS feed with two CSS selectors", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/pagefeed/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Navigation timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Show the browser window while rendering
    #[arg(long, global = true)]
    pub headful: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a page and print it as an RSS feed
    Feed {
        /// Page to turn into a feed
        #[arg(value_parser = parse_source_url)]
        url: Url,

        /// CSS selector matching each repeated item block
        #[arg(short, long, value_parser = parse_selector)]
        item: String,

        /// CSS selector, within an item, for the entry title
        #[arg(short, long, value_parser = parse_selector)]
        title: String,

        /// Write the feed to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a page and print the extracted entries as JSON
    Items {
        /// Page to extract from
        #[arg(value_parser = parse_source_url)]
        url: Url,

        /// CSS selector matching each repeated item block
        #[arg(short, long, value_parser = parse_selector)]
        item: String,

        /// CSS selector, within an item, for the entry title
        #[arg(short, long, value_parser = parse_selector)]
        title: String,
    },
    /// Fetch a page's raw markup for display while picking selectors
    Preview {
        /// Page to preview
        #[arg(value_parser = parse_source_url)]
        url: Url,

        /// Write the markup to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(timeout) = self.timeout {
            config.renderer.timeout_secs = timeout;
        }
        if self.headful {
            config.renderer.headless = false;
        }
    }
}

/// Accept only absolute http(s) URLs.
pub fn parse_source_url(s: &str) -> Result<Url, String> {
    let url = Url::parse(s.trim()).map_err(|e| format!("invalid URL `{}`: {}", s, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported URL scheme `{}`, expected http or https", other)),
    }
}

fn parse_selector(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("selector must not be empty".to_string());
    }
    Ok(s.to_string())
}
