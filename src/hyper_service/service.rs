use super::handler::{BoxHandler, Handler};
use super::{BoxError, BoxFuture, Request, Response};
use crate::trie::{InvalidPattern, WildcardTrie};

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::{Body, StatusCode};
use tracing::debug;

/// Request multiplexer dispatching on the request path.
///
/// Paths that match no pattern go to the not-found handler.
pub struct TreeMux<H = BoxHandler> {
    trie: WildcardTrie<H>,
    not_found: H,
    debug: bool,
}

impl<H> TreeMux<H> {
    pub fn new(not_found: H) -> Self {
        Self::from_trie(WildcardTrie::new(), not_found)
    }

    pub fn from_trie(trie: WildcardTrie<H>, not_found: H) -> Self {
        Self {
            trie,
            not_found,
            debug: false,
        }
    }

    /// Log the pattern used for every dispatched request.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn handle(&mut self, pattern: &str, handler: H) -> &mut Self {
        self.trie.insert(pattern, handler);
        self
    }

    pub fn try_handle(&mut self, pattern: &str, handler: H) -> Result<&mut Self, InvalidPattern> {
        self.trie.try_insert(pattern, handler)?;
        Ok(self)
    }

    /// Returns the handler for `path` and the pattern it is bound to, or the
    /// not-found handler and `None`.
    pub fn handler<'s>(&'s self, path: &str) -> (&'s H, Option<&'s str>) {
        match self.trie.find(path) {
            Some((h, pattern)) => (h, Some(pattern)),
            None => (&self.not_found, None),
        }
    }

    pub fn trie(&self) -> &WildcardTrie<H> {
        &self.trie
    }

    pub fn into_shared(self) -> SharedTreeMux<H> {
        SharedTreeMux(Arc::new(self))
    }
}

impl<H: Handler> TreeMux<H> {
    pub fn dispatch(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let (handler, pattern) = self.handler(req.uri().path());
        if self.debug {
            debug!(
                pattern = pattern.unwrap_or(""),
                path = req.uri().path(),
                "used route pattern"
            );
        }
        handler.call(req)
    }
}

impl<H> Service<Request> for TreeMux<H>
where
    H: Handler,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.dispatch(req)
    }
}

impl TreeMux<BoxHandler> {
    pub fn route(&mut self, pattern: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
        self.handle(pattern, Box::new(h))
    }

    pub fn set_not_found(&mut self, h: impl Handler + Send + Sync + 'static) -> &mut Self {
        self.not_found = Box::new(h);
        self
    }
}

impl Default for TreeMux<BoxHandler> {
    fn default() -> Self {
        Self::new(Box::new(not_found))
    }
}

async fn not_found(_: Request) -> Result<Response, Infallible> {
    let mut res = Response::new(Body::from("404 page not found\n"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    Ok(res)
}

/// A [`TreeMux`] behind an `Arc`, cloned once per connection.
pub struct SharedTreeMux<H = BoxHandler>(Arc<TreeMux<H>>);

impl<H> Clone for SharedTreeMux<H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<H> std::ops::Deref for SharedTreeMux<H> {
    type Target = TreeMux<H>;
    fn deref(&self) -> &TreeMux<H> {
        &self.0
    }
}

impl<H> Service<Request> for SharedTreeMux<H>
where
    H: Handler,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.0.dispatch(req)
    }
}
