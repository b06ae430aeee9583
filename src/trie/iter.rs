use super::Node;

use std::iter::FusedIterator;

/// Depth-first iterator over `(pattern, value)` pairs, visiting children in
/// insertion order.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(root: &'a Node<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.iter().rev());
            if let Some(ref value) = node.value {
                return Some((&*node.pattern, value));
            }
        }
        None
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
