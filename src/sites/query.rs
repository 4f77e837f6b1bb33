//! Query-string assembly for site requests.

use url::form_urlencoded;

/// Marker appended to every site request so the service answers with JSON.
pub const FORMAT_MARKER: &str = "mimeType=json";

/// Query parameters for a site search.
///
/// Callers either hand over ordered key/value pairs, which get URL-encoded,
/// or a pre-assembled raw query string, which is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParams {
    /// Ordered key/value pairs, URL-encoded during serialization.
    Pairs(Vec<(String, String)>),
    /// A raw query string used verbatim.
    Raw(String),
}

impl QueryParams {
    /// Builds the pairs shape from any iterator of key/value items.
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        QueryParams::Pairs(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Wraps a pre-assembled query string.
    pub fn raw(query: impl Into<String>) -> Self {
        QueryParams::Raw(query.into())
    }

    /// True when no caller parameters were supplied.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryParams::Pairs(pairs) => pairs.is_empty(),
            QueryParams::Raw(raw) => raw.is_empty(),
        }
    }

    /// Serializes the final query string.
    ///
    /// Caller parameters come first, in their given order; the
    /// [`FORMAT_MARKER`] follows, appended exactly once and always last.
    /// Since the marker is unconditional the result is never empty.
    pub fn to_query_string(&self) -> String {
        let mut query = match self {
            QueryParams::Pairs(pairs) => {
                let mut serializer = form_urlencoded::Serializer::new(String::new());
                for (key, value) in pairs {
                    serializer.append_pair(key, value);
                }
                serializer.finish()
            }
            QueryParams::Raw(raw) => raw.clone(),
        };

        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(FORMAT_MARKER);
        query
    }
}

impl Default for QueryParams {
    /// No caller parameters; serialization still yields the format marker.
    fn default() -> Self {
        QueryParams::Pairs(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_to_marker_only() {
        assert_eq!(QueryParams::default().to_query_string(), "mimeType=json");
    }

    #[test]
    fn test_pairs_keep_order_and_append_marker() {
        let query = QueryParams::pairs([
            ("countrycode", "US"),
            ("characteristicName", "pH"),
        ]);
        assert_eq!(
            query.to_query_string(),
            "countrycode=US&characteristicName=pH&mimeType=json"
        );
    }

    #[test]
    fn test_pairs_are_url_encoded() {
        let query = QueryParams::pairs([
            ("statecode", "US:55"),
            ("characteristicName", "Dissolved oxygen"),
        ]);
        assert_eq!(
            query.to_query_string(),
            "statecode=US%3A55&characteristicName=Dissolved+oxygen&mimeType=json"
        );
    }

    #[test]
    fn test_raw_passed_through_verbatim() {
        let query = QueryParams::raw("statecode=US%3A55&siteType=Stream");
        assert_eq!(
            query.to_query_string(),
            "statecode=US%3A55&siteType=Stream&mimeType=json"
        );
    }

    #[test]
    fn test_empty_raw_serializes_to_marker_only() {
        assert_eq!(QueryParams::raw("").to_query_string(), "mimeType=json");
    }

    #[test]
    fn test_marker_appears_exactly_once() {
        let serialized = QueryParams::pairs([("param1", "value1")]).to_query_string();
        assert_eq!(serialized.matches(FORMAT_MARKER).count(), 1);

        let serialized = QueryParams::raw("a=1&b=2").to_query_string();
        assert_eq!(serialized.matches(FORMAT_MARKER).count(), 1);
    }

    #[test]
    fn test_is_empty() {
        assert!(QueryParams::default().is_empty());
        assert!(QueryParams::raw("").is_empty());
        assert!(!QueryParams::pairs([("a", "1")]).is_empty());
        assert!(!QueryParams::raw("a=1").is_empty());
    }

    #[test]
    fn test_pairs_accepts_owned_strings() {
        let query = QueryParams::pairs(vec![("huc".to_string(), "07*".to_string())]);
        assert_eq!(query.to_query_string(), "huc=07*&mimeType=json");
    }
}
