//! The currency catalog: every currency the provider supports, with its
//! display name.
use std::fmt;

use serde::de;

use crate::fx::types::CurrencyCode;

/// The set of currencies supported by the provider.
///
/// Entries keep the order the provider returned them in; the provider does
/// not guarantee sorting, so menu order is provider-defined. The catalog is
/// loaded once per session and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(CurrencyCode, String)>,
}

impl Catalog {
    /// Returns all (code, display name) pairs in provider order.
    pub fn entries(&self) -> &[(CurrencyCode, String)] {
        &self.entries
    }

    /// Looks up the display name for a currency code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, name)| name.as_str())
    }

    /// Returns whether the catalog contains the given currency code.
    pub fn contains(&self, code: &str) -> bool {
        self.name(code).is_some()
    }

    /// Returns the number of currencies in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Catalog {
            entries: pairs
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

// Custom deserializer so catalog entries keep the provider's insertion
// order instead of collapsing into an unordered map.
impl<'de> de::Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> de::Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of currency code to display name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<CurrencyCode, String>()? {
                    entries.push(entry);
                }
                Ok(Catalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;

    #[test]
    fn test_preserves_provider_order() {
        // Deliberately not alphabetical; the provider's order must survive.
        let json = r#"{"ZAR":"South African Rand","AED":"United Arab Emirates Dirham","EUR":"Euro"}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let codes: Vec<&str> = catalog.entries().iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(codes, vec!["ZAR", "AED", "EUR"]);
    }

    #[test]
    fn test_name_lookup() {
        let json = r#"{"USD":"United States Dollar","EUR":"Euro"}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.name("EUR"), Some("Euro"));
        assert_eq!(catalog.name("XXX"), None);
        assert!(catalog.contains("USD"));
        assert!(!catalog.contains("GBP"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_malformed_response_is_an_error() {
        // A rates payload is not a catalog; the shape mismatch must surface
        // at the boundary instead of producing an empty catalog.
        let json = r#"{"USD": 1.0}"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());
    }
}
