//! Query parameters for list and view operations.

/// Filter parameters appended to a request's URL.
///
/// Keys keep their insertion order; setting an existing key replaces its
/// value in place. An empty query is treated the same as no query.
///
/// # Example
///
/// ```
/// use freshdesk::models::Query;
///
/// let query = Query::new().with("filter", "new_and_my_open").page(2);
/// assert_eq!(query.encode(), "filter=new_and_my_open&page=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder form of [`Query::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the page number (1-based).
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.with("page", page)
    }

    /// Sets the number of records per page.
    #[must_use]
    pub fn per_page(self, per_page: u32) -> Self {
        self.with("per_page", per_page)
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encodes the parameters as a query string, without the leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (k, v) in iter {
            query.insert(k, v);
        }
        query
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Query
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing_key() {
        let query = Query::new()
            .with("page", 1)
            .with("order_by", "created_at")
            .page(3);
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("page"), Some("3"));
        assert_eq!(query.encode(), "page=3&order_by=created_at");
    }

    #[test]
    fn test_encode_escapes_values() {
        let query = Query::from([("email", "jane+doe@example.com"), ("q", "a b&c")]);
        let expected = "email=jane%2Bdoe%40example.com&q=a%20b%26c";
        assert_eq!(query.encode(), expected);
    }

    #[test]
    fn test_empty_query() {
        let query = Query::new();
        assert!(query.is_empty());
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn test_collect_from_pairs() {
        let query: Query = vec![("status", "2"), ("priority", "4")]
            .into_iter()
            .collect();
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("status", "2"), ("priority", "4")]);
    }
}
