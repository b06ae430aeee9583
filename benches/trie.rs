use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use treemux::WildcardTrie;

fn trie_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie-find");

    group.bench_function("single-route", |b| {
        let mut trie: WildcardTrie<usize> = WildcardTrie::new();
        trie.insert("/hello/*", 1);
        b.iter(|| trie.find("/hello/world"))
    });

    group.bench_function("wildcard-fallthrough", |b| {
        let mut trie: WildcardTrie<usize> = WildcardTrie::new();
        for i in 0..32 {
            trie.insert(&format!("/api/v1/static{}", i), i);
        }
        trie.insert("/api/v1/*/items/*", 100);
        b.iter(|| trie.find("/api/v1/users/items/42"))
    });
}

fn trie_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            WildcardTrie::new,
            |trie: &mut WildcardTrie<usize>| {
                trie.insert("/hello/*", 1);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, trie_find, trie_insert);
criterion_main!(benches);
