//! Item extraction from rendered page snapshots.
//!
//! A snapshot is parsed once, the item selector picks the repeated blocks
//! (first [`MAX_ENTRIES`] only), and each block must yield both a title and a
//! link or it is skipped.
//!
//! ```text
//! PageSnapshot → DomTree → item blocks → (title, href) → resolve → ExtractedItem
//! ```

mod dom;

pub use dom::{DomNode, DomTree, HtmlTree};

use tracing::debug;
use url::Url;

use crate::app::Result;
use crate::domain::{ExtractedItem, PageSnapshot, MAX_ENTRIES};
use crate::resolver;

/// Compiled item and title selectors.
///
/// Compiling up front lets a malformed selector fail before any page is
/// rendered.
pub struct ItemQuery<T: DomTree = HtmlTree> {
    item_selector: String,
    title_selector: String,
    item: T::Selector,
    title: T::Selector,
}

impl ItemQuery {
    pub fn compile(item_selector: &str, title_selector: &str) -> Result<Self> {
        Self::with_engine(item_selector, title_selector)
    }
}

impl<T: DomTree> ItemQuery<T> {
    /// Compile the selectors for a specific [`DomTree`] engine.
    pub fn with_engine(item_selector: &str, title_selector: &str) -> Result<Self> {
        Ok(Self {
            item: T::compile(item_selector)?,
            title: T::compile(title_selector)?,
            item_selector: item_selector.to_string(),
            title_selector: title_selector.to_string(),
        })
    }

    pub fn item_selector(&self) -> &str {
        &self.item_selector
    }

    pub fn title_selector(&self) -> &str {
        &self.title_selector
    }

    /// Extract entries from `snapshot`, in document order.
    ///
    /// Matching nothing is not an error and yields an empty list.
    pub fn extract(&self, snapshot: &PageSnapshot) -> Vec<ExtractedItem> {
        let tree = T::parse(&snapshot.html);

        let items: Vec<ExtractedItem> = tree
            .select_all(&self.item)
            .take(MAX_ENTRIES)
            .enumerate()
            .filter_map(|(index, node)| self.extract_one(index, &node, &snapshot.source_url))
            .collect();

        debug!(
            item_selector = %self.item_selector,
            title_selector = %self.title_selector,
            degraded = snapshot.is_degraded(),
            "Extracted {} items from {}",
            items.len(),
            snapshot.source_url
        );

        items
    }

    fn extract_one<'a>(&self, index: usize, node: &T::Node<'a>, base: &Url) -> Option<ExtractedItem>
    where
        T: 'a,
    {
        let Some(title_el) = node.select_first(&self.title) else {
            debug!(index, "Skipping item without a title match");
            return None;
        };

        let title = title_el.text_content();
        if title.is_empty() {
            debug!(index, "Skipping item with an empty title");
            return None;
        }

        let Some(href) = node.first_anchor_href() else {
            debug!(index, "Skipping item without a link");
            return None;
        };

        match resolver::resolve(base, href) {
            Ok(link) => Some(ExtractedItem::new(title, link)),
            Err(e) => {
                debug!(index, href, "Skipping item with unresolvable link: {}", e);
                None
            }
        }
    }
}

/// One-shot extraction: compile both selectors and run them over `snapshot`.
pub fn extract(
    snapshot: &PageSnapshot,
    item_selector: &str,
    title_selector: &str,
) -> Result<Vec<ExtractedItem>> {
    let query = ItemQuery::compile(item_selector, title_selector)?;
    Ok(query.extract(snapshot))
}
