//! Fragment extraction for in-page links.

/// Element id an in-page `href` points at.
///
/// Returns `None` for hrefs that do not start with `#` and for a bare `#`.
///
/// ```
/// use folio_core::anchor::fragment_target;
///
/// assert_eq!(fragment_target("#projetos"), Some("projetos"));
/// assert_eq!(fragment_target("#"), None);
/// assert_eq!(fragment_target("https://example.com/#x"), None);
/// ```
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fragment() {
        assert_eq!(fragment_target("#contato"), Some("contato"));
    }

    #[test]
    fn test_relative_and_absolute_links_ignored() {
        assert_eq!(fragment_target("sobre.html#topo"), None);
        assert_eq!(fragment_target("/"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn test_only_first_hash_stripped() {
        assert_eq!(fragment_target("##odd"), Some("#odd"));
    }
}
