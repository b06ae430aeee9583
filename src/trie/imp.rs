use super::error::InvalidPattern;
use super::iter::Iter;
use super::{Node, WildcardTrie, DEFAULT_SEPARATOR, DEFAULT_WILDCARD};

impl<T> WildcardTrie<T> {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Creates an empty trie splitting patterns and paths on `separator`.
    ///
    /// # Panics
    /// Panics if `separator` is empty.
    pub fn with_separator(separator: &str) -> Self {
        assert!(!separator.is_empty(), "separator can not be empty");
        Self {
            separator: separator.into(),
            root: Node::new("", separator.to_owned()),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Resolves `path` to the value bound to the first matching pattern,
    /// together with that pattern.
    ///
    /// A leading separator is optional. Children are tried in the order
    /// they were first inserted, so when both `/foo/*` and `/foo/bar` could
    /// match, the one registered earlier wins.
    pub fn find<'s>(&'s self, path: &str) -> Option<(&'s T, &'s str)> {
        self.find_with(path, DEFAULT_WILDCARD)
    }

    /// Like [`find`](Self::find), treating segments equal to `wildcard` as
    /// wildcards instead of `"*"`.
    pub fn find_with<'s>(&'s self, path: &str, wildcard: &str) -> Option<(&'s T, &'s str)> {
        let node = self.search(path, wildcard)?;
        let value = node.value.as_ref()?;
        Some((value, &*node.pattern))
    }

    /// Binds `value` to `pattern`, replacing any value already bound to it.
    ///
    /// # Panics
    /// Panics if `pattern` ends with the separator.
    pub fn insert(&mut self, pattern: &str, value: T) -> &mut Self {
        if let Err(e) = self.insert_value(pattern, value) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, value: T) -> Result<&mut Self, InvalidPattern> {
        self.insert_value(pattern, value)?;
        Ok(self)
    }

    /// Number of patterns with a bound value.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.value.is_none() && self.root.children.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

impl<T> Default for WildcardTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a WildcardTrie<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
