//! In-page anchor audit.
//!
//! Nav and footer links point at fragment ids. A link whose id has no section is
//! kept as-is (the `#about` entry is a known placeholder) but reported at startup.

use crate::content::{FOOTER_LINKS, NAV_ITEMS, NavItem, SECTION_IDS};

/// Every fragment href the page links to, nav first, then footer, without duplicates.
pub fn page_anchors() -> Vec<String> {
    let mut hrefs: Vec<String> = NAV_ITEMS.iter().map(NavItem::href).collect();
    for link in FOOTER_LINKS {
        if !hrefs.iter().any(|h| h == link.href) {
            hrefs.push(link.href.to_string());
        }
    }
    hrefs
}

/// Fragment hrefs from `hrefs` with no matching id in `sections`.
///
/// Non-fragment hrefs (`tel:`, `mailto:`) and the bare `#` placeholder are ignored.
/// Output keeps input order and drops duplicates.
pub fn unresolved_anchors<I, S>(hrefs: I, sections: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut missing: Vec<String> = Vec::new();
    for href in hrefs {
        let href = href.as_ref();
        let Some(id) = href.strip_prefix('#') else {
            continue;
        };
        if id.is_empty() || sections.contains(&id) {
            continue;
        }
        if !missing.iter().any(|m| m == href) {
            missing.push(href.to_string());
        }
    }
    missing
}

/// Audit of the page as shipped.
pub fn audit_page() -> Vec<String> {
    unresolved_anchors(page_anchors(), SECTION_IDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn about_is_the_only_dangling_anchor() {
        assert_eq!(audit_page(), vec!["#about".to_string()]);
    }

    #[test]
    fn ignores_external_and_placeholder_links() {
        let hrefs = ["tel:(555) 123-4567", "mailto:a@b.c", "#", "#home"];
        assert!(unresolved_anchors(hrefs, &["home"]).is_empty());
    }

    #[test]
    fn reports_each_missing_id_once_in_order() {
        let hrefs = ["#faq", "#home", "#about", "#faq"];
        assert_eq!(
            unresolved_anchors(hrefs, &["home"]),
            vec!["#faq".to_string(), "#about".to_string()]
        );
    }

    #[test]
    fn page_anchors_merge_nav_and_footer() {
        assert_eq!(
            page_anchors(),
            vec!["#home", "#about", "#services", "#reviews", "#contact"]
        );
    }
}
