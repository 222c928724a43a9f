//! Raw markup for the interactive selector-picking surface.
//!
//! Preview never renders or extracts; it fetches the page as served and
//! makes it displayable away from its origin.

use url::Url;

use crate::app::Result;
use crate::fetcher::Fetcher;

/// Fetch `url` and prepare the markup for display.
pub async fn fetch_preview<F>(fetcher: &F, url: &Url) -> Result<String>
where
    F: Fetcher + ?Sized,
{
    let html = fetcher.fetch(url).await?;
    Ok(prepare_preview(&html, url))
}

/// Insert a `<base href>` pointing at `base` so relative stylesheets,
/// scripts and images resolve against the original page.
///
/// The element goes right after the opening `<head>` tag, or at the very
/// start when the markup has none.
pub fn prepare_preview(html: &str, base: &Url) -> String {
    let base_tag = format!(r#"<base href="{}">"#, escape_attr(base.as_str()));

    match head_content_start(html) {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + base_tag.len());
            out.push_str(&html[..pos]);
            out.push_str(&base_tag);
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{}{}", base_tag, html),
    }
}

/// Byte offset just past the `>` of the first `<head ...>` tag.
fn head_content_start(html: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    lower.match_indices("<head").find_map(|(start, tag)| {
        let after = start + tag.len();
        match lower.as_bytes().get(after) {
            Some(b'>') => Some(after + 1),
            Some(c) if c.is_ascii_whitespace() || *c == b'/' => {
                lower[after..].find('>').map(|end| after + end + 1)
            }
            _ => None,
        }
    })
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
