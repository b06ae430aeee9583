use super::{Node, WildcardTrie};

use std::fmt;

impl<T: fmt::Debug> fmt::Display for WildcardTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WildcardTrie({})", self.separator)?;
        self.root.render(f)
    }
}

impl<T: fmt::Debug> Node<T> {
    // {"pattern"=value,[children...]}
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}={:?}", &*self.pattern, self.value)?;
        if let Some((first, rest)) = self.children.split_first() {
            f.write_str(",[")?;
            first.render(f)?;
            for child in rest {
                f.write_str(",")?;
                child.render(f)?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}
