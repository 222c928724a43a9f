use scraper::{ElementRef, Html, Selector};

use crate::app::{PagefeedError, Result};

/// Elements whose text is never rendered as page content.
const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed document that can be queried with compiled selectors.
///
/// Extraction only needs these few capabilities, so the parsing engine stays
/// swappable behind them.
pub trait DomTree {
    type Selector;
    type Node<'a>: DomNode<'a, Selector = Self::Selector>
    where
        Self: 'a;

    /// Parse markup leniently; truncated or malformed input still yields a tree.
    fn parse(html: &str) -> Self;

    fn compile(css: &str) -> Result<Self::Selector>;

    /// All matching elements, in document order.
    fn select_all<'a>(
        &'a self,
        selector: &'a Self::Selector,
    ) -> impl Iterator<Item = Self::Node<'a>> + 'a;
}

pub trait DomNode<'a>: Sized {
    type Selector;

    /// First descendant matching `selector`, excluding the node itself.
    fn select_first(&self, selector: &Self::Selector) -> Option<Self>;

    /// `href` of the first descendant `<a>` that carries one.
    fn first_anchor_href(&self) -> Option<&'a str>;

    /// Visible text content with tags stripped, whitespace runs collapsed and
    /// trimmed. Script and style bodies are not part of it.
    fn text_content(&self) -> String;
}

/// [`DomTree`] backed by the html5ever parser in the `scraper` crate.
pub struct HtmlTree(Html);

impl DomTree for HtmlTree {
    type Selector = Selector;
    type Node<'a> = ElementRef<'a>;

    fn parse(html: &str) -> Self {
        Self(Html::parse_document(html))
    }

    fn compile(css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| PagefeedError::Selector {
            selector: css.to_string(),
            reason: e.to_string(),
        })
    }

    fn select_all<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.0.select(selector)
    }
}

impl<'a> DomNode<'a> for ElementRef<'a> {
    type Selector = Selector;

    fn select_first(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn first_anchor_href(&self) -> Option<&'a str> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "a")
            .find_map(|el| el.value().attr("href"))
    }

    fn text_content(&self) -> String {
        let mut raw = String::new();
        for node in self.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != self.id())
                .filter_map(ElementRef::wrap)
                .any(|el| NON_VISIBLE_ELEMENTS.contains(&el.value().name()));
            if !hidden {
                raw.push_str(text);
            }
        }
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
