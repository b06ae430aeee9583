mod core;
mod display;
mod error;
mod imp;
mod iter;
mod trie_macro;

pub use self::error::InvalidPattern;
pub use self::iter::Iter;

pub const DEFAULT_SEPARATOR: &str = "/";
pub const DEFAULT_WILDCARD: &str = "*";

/// A trie of separator-delimited patterns.
///
/// Every node matches exactly one segment. A segment equal to the wildcard
/// token matches any single segment at lookup time; at insertion time it is
/// an ordinary literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardTrie<T> {
    separator: Box<str>,
    root: Node<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    segment: Box<str>,
    pattern: Box<str>,
    value: Option<T>,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    fn new(segment: &str, pattern: String) -> Self {
        Self {
            segment: segment.into(),
            pattern: pattern.into(),
            value: None,
            children: Vec::new(),
        }
    }
}
