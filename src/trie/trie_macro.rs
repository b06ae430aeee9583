#[macro_export]
macro_rules! wildcard_trie {
    {$($pattern:expr => $value:expr),* $(,)?} => {{
        let mut __trie = $crate::WildcardTrie::new();
        $(__trie.insert($pattern, $value);)*
        __trie
    }};
}
