//! Turns hrefs found in a page into absolute URLs.

use url::Url;

/// Resolve `href` against the page URL it was found on.
///
/// Absolute hrefs come back normalized; relative ones (path-relative,
/// protocol-relative, query- or fragment-only) are joined per the WHATWG URL
/// rules. Leading and trailing whitespace is ignored, as browsers do.
pub fn resolve(base: &Url, href: &str) -> Result<Url, url::ParseError> {
    base.join(href.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://ex.com/x").unwrap()
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(resolve(&base(), "/a/b").unwrap().as_str(), "https://ex.com/a/b");
    }

    #[test]
    fn test_path_relative() {
        let base = Url::parse("https://ex.com/news/index.html").unwrap();
        assert_eq!(
            resolve(&base, "story/42").unwrap().as_str(),
            "https://ex.com/news/story/42"
        );
        assert_eq!(
            resolve(&base, "../about").unwrap().as_str(),
            "https://ex.com/about"
        );
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            resolve(&base(), "//cdn.ex.org/p").unwrap().as_str(),
            "https://cdn.ex.org/p"
        );
    }

    #[test]
    fn test_fragment_only() {
        assert_eq!(
            resolve(&base(), "#comments").unwrap().as_str(),
            "https://ex.com/x#comments"
        );
    }

    #[test]
    fn test_absolute_unchanged() {
        assert_eq!(
            resolve(&base(), "http://other.org/p?q=1").unwrap().as_str(),
            "http://other.org/p?q=1"
        );
        // normalization only
        assert_eq!(
            resolve(&base(), "HTTPS://Other.org").unwrap().as_str(),
            "https://other.org/"
        );
    }

    #[test]
    fn test_whitespace_around_href() {
        assert_eq!(
            resolve(&base(), "  /a/b\n").unwrap().as_str(),
            "https://ex.com/a/b"
        );
    }

    #[test]
    fn test_base_untouched() {
        let base = base();
        let _ = resolve(&base, "/elsewhere");
        assert_eq!(base.as_str(), "https://ex.com/x");
    }

    #[test]
    fn test_unresolvable_href() {
        assert!(resolve(&base(), "http://[::1").is_err());
    }
}
