//! A tree-based URL router.
//!
//! Patterns are split on a separator (`/` by default) into segments and stored
//! in a [`WildcardTrie`]. A segment equal to `*` matches any single segment of
//! a request path; partial wildcards such as `foo*` are plain literals.
//!
//! ```
//! use treemux::WildcardTrie;
//!
//! let mut trie = WildcardTrie::new();
//! trie.insert("/countries/*/cities/*", 1)
//!     .insert("/countries/belgium", 2);
//!
//! assert_eq!(
//!     trie.find("/countries/belgium/cities/wommelgem"),
//!     Some((&1, "/countries/*/cities/*"))
//! );
//! assert_eq!(trie.find("countries/belgium"), Some((&2, "/countries/belgium")));
//! assert_eq!(trie.find("/countries"), None);
//! ```
//!
//! When several patterns match, the one whose segments were registered first
//! wins. There is no most-specific-match ordering.
//!
//! With the `hyper-service` feature, [`TreeMux`] dispatches hyper requests to
//! handlers bound in a trie.

#![deny(unsafe_code)]

mod trie;

pub use self::trie::{InvalidPattern, Iter, WildcardTrie, DEFAULT_SEPARATOR, DEFAULT_WILDCARD};

#[cfg(feature = "hyper-service")]
mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{BoxError, BoxFuture, BoxHandler, Handler, SharedTreeMux, TreeMux};
