use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Strict (ISO/IEC 29500) namespace URIs and their transitional counterparts.
const STRICT_NAMESPACES: [(&str, &str); 6] = [
    (
        "http://purl.oclc.org/ooxml/officeDocument/relationships",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    ),
    (
        "http://purl.oclc.org/ooxml/spreadsheetml/main",
        "http://schemas.openxmlformats.org/spreadsheetml/2006/main",
    ),
    (
        "http://purl.oclc.org/ooxml/drawingml/main",
        "http://schemas.openxmlformats.org/drawingml/2006/main",
    ),
    (
        "http://purl.oclc.org/ooxml/drawingml/chart",
        "http://schemas.openxmlformats.org/drawingml/2006/chart",
    ),
    (
        "http://purl.oclc.org/ooxml/drawingml/spreadsheetDrawing",
        "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing",
    ),
    (
        "http://purl.oclc.org/ooxml/officeDocument/extendedProperties",
        "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
    ),
];

static STRICT_NAMESPACE_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(STRICT_NAMESPACES.iter().map(|(strict, _)| strict))
        .expect("Failed to build namespace matcher")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use xlchart::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use xlchart::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;"); // &amp; is matched first
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Rewrite strict namespace URIs to the transitional set.
///
/// Parts saved in "Strict Open XML" conformance use `purl.oclc.org` namespace
/// URIs. Everything downstream only understands the transitional URIs, so
/// they are normalized before decoding. Input without any strict URI is
/// returned borrowed.
///
/// # Examples
///
/// ```
/// use xlchart::common::xml::strict_to_transitional;
/// let strict = br#"<xdr:wsDr xmlns:xdr="http://purl.oclc.org/ooxml/drawingml/spreadsheetDrawing"/>"#;
/// let normalized = strict_to_transitional(strict);
/// let text = std::str::from_utf8(&normalized).unwrap();
/// assert!(text.contains("schemas.openxmlformats.org"));
/// ```
pub fn strict_to_transitional(xml: &[u8]) -> Cow<'_, [u8]> {
    if !STRICT_NAMESPACE_MATCHER.is_match(xml) {
        return Cow::Borrowed(xml);
    }
    let replacements: Vec<&str> = STRICT_NAMESPACES.iter().map(|(_, t)| *t).collect();
    Cow::Owned(STRICT_NAMESPACE_MATCHER.replace_all_bytes(xml, &replacements))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_round_trip() {
        let raw = r#"Sheet1!$A$1 & "Q1" <draft>"#;
        assert_eq!(unescape_xml(&escape_xml(raw)), raw);
    }

    #[test]
    fn test_transitional_input_is_borrowed() {
        let xml = br#"<c:chart xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart"/>"#;
        assert!(matches!(strict_to_transitional(xml), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strict_namespaces_are_rewritten() {
        let xml = concat!(
            r#"<xdr:wsDr xmlns:xdr="http://purl.oclc.org/ooxml/drawingml/spreadsheetDrawing" "#,
            r#"xmlns:a="http://purl.oclc.org/ooxml/drawingml/main" "#,
            r#"xmlns:r="http://purl.oclc.org/ooxml/officeDocument/relationships"/>"#
        );
        let normalized = strict_to_transitional(xml.as_bytes());
        let text = std::str::from_utf8(&normalized).unwrap();
        assert!(!text.contains("purl.oclc.org"));
        assert!(text.contains("http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing"));
        assert!(text.contains("http://schemas.openxmlformats.org/drawingml/2006/main"));
        assert!(text.contains("http://schemas.openxmlformats.org/officeDocument/2006/relationships"));
    }
}
