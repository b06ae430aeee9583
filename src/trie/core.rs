use super::error::InvalidPattern;
use super::{Node, WildcardTrie};

use smallvec::SmallVec;
use tracing::trace;

type Segments<'a> = SmallVec<[&'a str; 8]>;

impl<T> WildcardTrie<T> {
    fn split<'a>(&self, s: &'a str) -> Segments<'a> {
        s.split(&*self.separator).collect()
    }

    pub(super) fn insert_value(&mut self, pattern: &str, value: T) -> Result<(), InvalidPattern> {
        let segments = self.split(pattern);
        let parts: &[&str] = match segments.split_first() {
            Some((&"", rest)) => rest,
            _ => segments.as_slice(),
        };

        if parts.last() == Some(&"") {
            return Err(InvalidPattern::new(pattern, "pattern can not end with separator"));
        }

        let separator = &*self.separator;
        let mut node = &mut self.root;
        for (i, &part) in parts.iter().enumerate() {
            let pos = match node.children.iter().position(|c| &*c.segment == part) {
                Some(pos) => pos,
                None => {
                    let child = Node::new(part, join_pattern(separator, &parts[..=i]));
                    node.children.push(child);
                    node.children.len() - 1
                }
            };
            node = &mut node.children[pos];
        }

        if node.value.replace(value).is_some() {
            trace!(pattern = &*node.pattern, "replaced existing value");
        }
        Ok(())
    }

    pub(super) fn search(&self, path: &str, wildcard: &str) -> Option<&Node<T>> {
        let segments = self.split(path);
        match segments.as_slice() {
            [""] | ["", ""] => self.root.endpoint(),
            ["", rest @ ..] => self.root.search_children(rest, wildcard),
            parts => self.root.search_children(parts, wildcard),
        }
    }
}

impl<T> Node<T> {
    fn endpoint(&self) -> Option<&Self> {
        self.value.as_ref().map(|_| self)
    }

    fn search(&self, parts: &[&str], wildcard: &str) -> Option<&Self> {
        let (&part, rest) = parts.split_first()?;

        if part != &*self.segment && &*self.segment != wildcard {
            if self.segment.is_empty() && self.children.is_empty() {
                return self.endpoint();
            }
            return None;
        }

        if rest.is_empty() {
            return self.endpoint();
        }
        self.search_children(rest, wildcard)
    }

    // first child in insertion order wins
    fn search_children(&self, parts: &[&str], wildcard: &str) -> Option<&Self> {
        self.children
            .iter()
            .find_map(|child| child.search(parts, wildcard))
    }
}

#[inline]
fn join_pattern(separator: &str, parts: &[&str]) -> String {
    let mut pattern = String::from(separator);
    pattern.push_str(&parts.join(separator));
    pattern
}
