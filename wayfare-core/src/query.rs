//! Query-string accessor.

/// A parsed query string.
///
/// Parsing follows `application/x-www-form-urlencoded` semantics
/// (percent-decoding, `+` as space), the same family the browser's
/// `URLSearchParams` implements. Pairs are kept in document order and keys
/// may repeat; [`get`] returns the first value for a key.
///
/// An absent query string parses to an accessor that is both empty and
/// [`is_absent`] - the distinction only matters to callers that care whether
/// a bare `?` was present.
///
/// [`get`]: Query::get
/// [`is_absent`]: Query::is_absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
    absent: bool,
}

impl Query {
    /// Parse a query string (without the leading `?`).
    ///
    /// Keys without `=` parse as empty-valued: `?flag` yields
    /// `get("flag") == Some("")`.
    pub fn parse(search: &str) -> Self {
        let pairs = form_urlencoded::parse(search.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self {
            pairs,
            absent: false,
        }
    }

    /// The accessor for a location with no query string at all.
    pub const fn empty() -> Self {
        Self {
            pairs: Vec::new(),
            absent: true,
        }
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in document order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The number of key/value pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the query carries no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether the location had no query string at all (not even `?`).
    pub fn is_absent(&self) -> bool {
        self.absent
    }

    /// Re-encode the pairs as a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}

impl From<Option<&str>> for Query {
    fn from(search: Option<&str>) -> Self {
        match search {
            Some(s) => Self::parse(s),
            None => Self::empty(),
        }
    }
}
