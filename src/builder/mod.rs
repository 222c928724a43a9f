//! RSS 2.0 serialization of extracted entries.

use chrono::{DateTime, Utc};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use url::Url;

use crate::app::{PagefeedError, Result};
use crate::config::FeedConfig;
use crate::domain::{ExtractedItem, FeedDocument};

/// Assembles channel metadata and entries into a feed document.
#[derive(Debug, Clone, Default)]
pub struct FeedBuilder {
    config: FeedConfig,
}

impl FeedBuilder {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    /// Build the document for `source_url`, keeping at most the first 20 items.
    pub fn build(&self, source_url: &Url, items: Vec<ExtractedItem>) -> FeedDocument {
        FeedDocument::new(
            format!("{}{}", self.config.title_prefix, source_url),
            source_url.clone(),
            self.config.description.clone(),
            items,
        )
    }

    /// Build and serialize in one step.
    pub fn render(&self, source_url: &Url, items: Vec<ExtractedItem>) -> Result<Vec<u8>> {
        let doc = self.build(source_url, items);
        self.serialize(&doc, Utc::now())
    }

    /// Serialize `doc` as RSS 2.0.
    ///
    /// `scraped_at` is only written out when `stamp_scrape_time` is enabled;
    /// otherwise entries carry no publish date.
    pub fn serialize(&self, doc: &FeedDocument, scraped_at: DateTime<Utc>) -> Result<Vec<u8>> {
        let pub_date = self
            .config
            .stamp_scrape_time
            .then(|| scraped_at.to_rfc2822());

        let channel = to_channel(doc, pub_date);

        let bytes = if self.config.pretty {
            channel.pretty_write_to(Vec::new(), b' ', 2)
        } else {
            channel.write_to(Vec::new())
        };

        bytes.map_err(|e| PagefeedError::Feed(e.to_string()))
    }
}

fn to_channel(doc: &FeedDocument, pub_date: Option<String>) -> Channel {
    let items: Vec<Item> = doc
        .entries()
        .iter()
        .map(|entry| {
            let guid = GuidBuilder::default()
                .value(entry.guid().to_string())
                .permalink(true)
                .build();

            ItemBuilder::default()
                .title(Some(entry.title.clone()))
                .link(Some(entry.link.to_string()))
                .guid(Some(guid))
                .pub_date(pub_date.clone())
                .build()
        })
        .collect();

    ChannelBuilder::default()
        .title(doc.channel_title.clone())
        .link(doc.channel_link.to_string())
        .description(doc.channel_description.clone())
        .items(items)
        .build()
}
