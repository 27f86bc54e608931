//! Query filter construction for product listings.

use mongodb::bson::{Document, doc};

/// Build the product listing filter.
///
/// - `category` filters by exact slug match.
/// - `q` filters by case-insensitive substring match on `title`. The input
///   is escaped, so this is a literal contains predicate, not a regex or a
///   search index - it scans the matching set.
///
/// Both are optional and combinable; empty strings are treated as absent,
/// matching the original query-parameter semantics.
#[must_use]
pub fn product_filter(category: Option<&str>, q: Option<&str>) -> Document {
    let mut filter = Document::new();

    if let Some(category) = category.filter(|s| !s.is_empty()) {
        filter.insert("category", category);
    }

    if let Some(q) = q.filter(|s| !s.is_empty()) {
        filter.insert("title", doc! { "$regex": regex::escape(q), "$options": "i" });
    }

    filter
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_yields_empty_document() {
        assert_eq!(product_filter(None, None), Document::new());
    }

    #[test]
    fn test_category_exact_match() {
        let filter = product_filter(Some("shirts"), None);
        assert_eq!(filter, doc! { "category": "shirts" });
    }

    #[test]
    fn test_q_builds_case_insensitive_regex() {
        let filter = product_filter(None, Some("tee"));
        assert_eq!(
            filter,
            doc! { "title": { "$regex": "tee", "$options": "i" } }
        );
    }

    #[test]
    fn test_filters_combine() {
        let filter = product_filter(Some("shirts"), Some("tee"));
        assert_eq!(filter.get_str("category").unwrap(), "shirts");
        assert!(filter.get_document("title").is_ok());
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        assert_eq!(product_filter(Some(""), Some("")), Document::new());
    }

    #[test]
    fn test_regex_metacharacters_escaped() {
        let filter = product_filter(None, Some("100% (cotton)"));
        let title = filter.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), r"100% \(cotton\)");
    }
}
