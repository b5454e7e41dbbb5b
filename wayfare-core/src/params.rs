//! Ordered path parameters extracted from a route template.

/// Path parameters captured by `:name` placeholders.
///
/// Pairs are stored in template order, so iteration yields parameters in the
/// order their placeholders appear in the registered template. Lookup is a
/// linear scan; templates have a handful of placeholders at most, so a map
/// would buy nothing here.
///
/// # Example
///
/// ```rust,ignore
/// // Template "/teams/:team/members/:member" matched against
/// // "/teams/blue/members/7":
/// assert_eq!(params.get("team"), Some("blue"));
/// assert_eq!(params.get("member"), Some("7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Create a parameter set from name/value pairs in template order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Look up a parameter by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The number of captured parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
