//! Search query construction.
//!
//! Turns raw, untrusted request parameters into a single escaped query
//! expression plus the set of fields the client asked for. Pure string
//! work, no I/O, and no failure path: malformed input degrades to a
//! best-effort expression instead of erroring.

use std::collections::HashSet;

use super::escape::escape;
use crate::models::Collection;

/// A built query: the expression handed to `FT.SEARCH` and the parsed
/// field selection applied when decoding the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub expression: String,
    /// Empty set means "no filtering, return all fields".
    pub fields: HashSet<String>,
}

/// Build the query expression for one request.
///
/// Clauses are joined by implicit AND:
/// - a prefix-match clause `term*` from `search_term`, suppressed when the
///   term is empty and a tag filter is supplied (an empty term should scope
///   the match to tags, not add a free-text constraint);
/// - for cocktails only, a tag clause `@ingredients:{ v1 | v2 }` matching
///   documents tagged with any of the comma-separated `tag_filter` values.
///   Ingredients are tagged onto cocktails, not onto themselves, so the
///   tag filter is meaningless for the other collections.
///
/// With no term and no tags the expression degenerates to the wildcard,
/// which the engine treats as "match all documents".
pub fn build_query(
    collection: Collection,
    search_term: &str,
    tag_filter: &str,
    fields: &str,
) -> SearchQuery {
    let mut expression = String::new();
    let has_tags = !tag_filter.is_empty();

    if !(search_term.is_empty() && has_tags) {
        // Escape the raw term exactly once, then trim the escaped form.
        let term = escape(search_term);
        expression.push_str(term.trim());
        expression.push_str("* ");
    }

    if collection == Collection::Cocktails && has_tags {
        let values: Vec<String> = tag_filter.split(',').map(escape).collect();
        expression.push_str("@ingredients:{ ");
        expression.push_str(&values.join(" | "));
        expression.push_str(" } ");
    }

    let fields: HashSet<String> = if fields.is_empty() {
        HashSet::new()
    } else {
        fields.split(',').map(str::to_owned).collect()
    };

    SearchQuery { expression, fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match_on_plain_term() {
        let query = build_query(Collection::Ingredients, "vod", "", "");
        assert_eq!(query.expression, "vod* ");
        assert!(query.fields.is_empty());
    }

    #[test]
    fn test_empty_request_matches_everything() {
        let query = build_query(Collection::Alcohols, "", "", "");
        assert_eq!(query.expression, "* ");
    }

    #[test]
    fn test_term_is_escaped_before_prefix_star() {
        let query = build_query(Collection::Cocktails, "gin-fizz", "", "");
        assert_eq!(query.expression, "gin\\-fizz* ");
    }

    #[test]
    fn test_term_is_trimmed() {
        let query = build_query(Collection::Ingredients, "  vod  ", "", "");
        assert_eq!(query.expression, "vod* ");
    }

    #[test]
    fn test_tag_filter_builds_single_or_clause() {
        let query = build_query(Collection::Cocktails, "", "lemon,sugar", "");
        assert_eq!(query.expression, "@ingredients:{ lemon | sugar } ");
    }

    #[test]
    fn test_tag_values_are_escaped_independently() {
        let query = build_query(Collection::Cocktails, "", "lime-juice,(mint)", "");
        assert_eq!(
            query.expression,
            "@ingredients:{ lime\\-juice | \\(mint\\) } "
        );
    }

    #[test]
    fn test_term_and_tags_combine_with_implicit_and() {
        let query = build_query(Collection::Cocktails, "moj", "rum,mint", "");
        assert_eq!(query.expression, "moj* @ingredients:{ rum | mint } ");
    }

    #[test]
    fn test_empty_term_with_tags_suppresses_free_text_clause() {
        let query = build_query(Collection::Cocktails, "", "lemon", "");
        assert_eq!(query.expression, "@ingredients:{ lemon } ");
    }

    #[test]
    fn test_tag_filter_ignored_outside_cocktails() {
        let query = build_query(Collection::Ingredients, "vod", "lemon", "");
        assert_eq!(query.expression, "vod* ");
    }

    #[test]
    fn test_fields_split_and_deduplicated() {
        let query = build_query(Collection::Cocktails, "", "", "name,category,name");
        assert_eq!(query.fields.len(), 2);
        assert!(query.fields.contains("name"));
        assert!(query.fields.contains("category"));
    }

    #[test]
    fn test_empty_fields_means_no_filtering() {
        let query = build_query(Collection::Cocktails, "moj", "", "");
        assert!(query.fields.is_empty());
    }
}
