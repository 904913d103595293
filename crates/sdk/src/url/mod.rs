//! URL query state for the zap view
//!
//! Inbound, the query string is parsed into the zap store once per visit.
//! Afterwards the store is mirrored back into the query, throttled.

pub mod params;
pub mod reconciler;
pub mod throttle;

pub use params::{classify, UrlCoinIntent, ZapUrlParams};
pub use reconciler::{LatchState, ZapUrlReconciler};
pub use throttle::Throttle;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;

/// Query parameters keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlQuery(BTreeMap<String, String>);

impl UrlQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a=1&b=2` (a leading `?` is ignored). The first occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut map = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            map.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }
        Self(map)
    }

    /// Build from pairs, dropping empty values
    pub fn from_non_empty<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value or the empty string
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Sub-query restricted to `keys`, dropping empty values
    pub fn pick(&self, keys: &[&str]) -> Self {
        Self::from_non_empty(keys.iter().map(|k| (*k, self.get_or_empty(k))))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

/// Pathname plus query of the current page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteLocation {
    pub pathname: String,
    pub query: UrlQuery,
}

impl RouteLocation {
    pub fn new(pathname: &str, query: UrlQuery) -> Self {
        Self {
            pathname: pathname.to_string(),
            query,
        }
    }

    /// Split `/path?query` into its parts
    pub fn parse(location: &str) -> Self {
        match location.split_once('?') {
            Some((pathname, query)) => Self::new(pathname, UrlQuery::parse(query)),
            None => Self::new(location, UrlQuery::new()),
        }
    }
}

impl fmt::Display for RouteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.pathname)
        } else {
            write!(f, "{}?{}", self.pathname, self.query.to_query_string())
        }
    }
}

/// Whether a pathname belongs to the zap view
pub fn is_zap_page(pathname: &str, zap_path: &str) -> bool {
    pathname.contains(zap_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let query = UrlQuery::parse("?inputCurrency=sol&inputAmount=1.5&inputAmount=2");
        assert_eq!(query.get("inputCurrency"), Some("sol"));
        assert_eq!(query.get("inputAmount"), Some("1.5"));
        assert_eq!(query.get("missing"), None);
        assert_eq!(query.get_or_empty("missing"), "");
    }

    #[test]
    fn test_pick_drops_empty_and_unrelated() {
        let query = UrlQuery::parse("a=1&b=&c=3");
        let picked = query.pick(&["a", "b"]);
        assert_eq!(picked, UrlQuery::from_non_empty([("a", "1")]));
    }

    #[test]
    fn test_location_round_trip() {
        let location = RouteLocation::parse("/zap?fixed=in&inputCurrency=sol");
        assert_eq!(location.pathname, "/zap");
        assert_eq!(location.query.get("fixed"), Some("in"));
        assert_eq!(RouteLocation::parse(&location.to_string()), location);

        let bare = RouteLocation::parse("/liquidity");
        assert_eq!(bare.to_string(), "/liquidity");
    }

    #[test]
    fn test_is_zap_page() {
        assert!(is_zap_page("/zap", "/zap"));
        assert!(is_zap_page("/zap/", "/zap"));
        assert!(!is_zap_page("/liquidity/add", "/zap"));
    }
}
