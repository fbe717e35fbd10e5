//! Domain model for the cocktail database cache.

use std::collections::HashMap;

/// A searchable collection served by this API.
///
/// The set is closed: each collection maps to one search index and one
/// document key prefix, provisioned at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Ingredients,
    Alcohols,
    Cocktails,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Ingredients,
        Collection::Alcohols,
        Collection::Cocktails,
    ];

    /// Name of the search index holding this collection.
    pub fn index_name(self) -> &'static str {
        match self {
            Self::Ingredients => "idx:ingredients",
            Self::Alcohols => "idx:alcohols",
            Self::Cocktails => "idx:cocktails",
        }
    }

    /// Storage key prefix of documents in this collection.
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::Ingredients => "ingredient:",
            Self::Alcohols => "alcohol:",
            Self::Cocktails => "cocktail:",
        }
    }

    /// JSON key under which this collection's records appear in the
    /// response envelope.
    pub fn response_key(self) -> &'static str {
        match self {
            Self::Ingredients => "ingredients",
            Self::Alcohols => "alcohols",
            Self::Cocktails => "cocktails",
        }
    }

    /// Index schema as `(field, type)` argument pairs for `FT.CREATE`.
    pub(crate) fn schema(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Ingredients | Self::Alcohols => &[("name", "TEXT"), ("type", "TEXT")],
            Self::Cocktails => &[
                ("name", "TEXT"),
                ("category", "TEXT"),
                ("ingredients", "TAG"),
            ],
        }
    }
}

/// One matched document, as field name to field value.
pub type Record = HashMap<String, String>;

/// Decoded output of a search: the engine-reported total match count and
/// the records of the requested page, in engine order.
///
/// `count` is the total across the whole index, not `records.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedResult {
    pub count: i64,
    pub records: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_names() {
        assert_eq!(Collection::Ingredients.index_name(), "idx:ingredients");
        assert_eq!(Collection::Alcohols.index_name(), "idx:alcohols");
        assert_eq!(Collection::Cocktails.index_name(), "idx:cocktails");
    }

    #[test]
    fn test_key_prefixes() {
        assert_eq!(Collection::Ingredients.key_prefix(), "ingredient:");
        assert_eq!(Collection::Alcohols.key_prefix(), "alcohol:");
        assert_eq!(Collection::Cocktails.key_prefix(), "cocktail:");
    }

    #[test]
    fn test_response_keys_match_index_names() {
        for collection in Collection::ALL {
            let key = collection.response_key();
            assert!(collection.index_name().ends_with(key));
        }
    }

    #[test]
    fn test_only_cocktails_carry_a_tag_field() {
        for collection in Collection::ALL {
            let has_tag = collection.schema().iter().any(|(_, kind)| *kind == "TAG");
            assert_eq!(has_tag, collection == Collection::Cocktails);
        }
    }
}
