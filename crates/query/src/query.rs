//! Query mapping: ordered string-to-string filter parameters
//!
//! Keys keep the position of their first assignment; assigning an existing
//! key replaces its value in place. This gives path-derived filters their
//! precedence: merged after the query string, they always win.

/// Ordered mapping of filter keys to values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    entries: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL query string such as `country=kenya&is_open_to_public=true`
    ///
    /// Percent-escapes and `+` are decoded. A leading `?` is ignored. A key
    /// given more than once keeps its first position and its last value.
    pub fn parse(query_string: &str) -> Self {
        let raw = query_string.strip_prefix('?').unwrap_or(query_string);
        form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Assign a value, overwriting any earlier value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Merge a filter derived from a URL path segment
    ///
    /// The path value is applied last, so it overrides a query-string value
    /// under the same key.
    pub fn with_path_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value assigned to a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no filters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (k, v) in iter {
            query.insert(k, v);
        }
        query
    }
}

/// Decode one percent-encoded URL path segment
///
/// Unlike query values, `+` is kept literally in paths.
pub fn decode_path_segment(segment: &str) -> String {
    let escaped = segment.replace('+', "%2B").replace('&', "%26");
    form_urlencoded::parse(format!("v={}", escaped).as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}
