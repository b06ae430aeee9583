#![cfg(feature = "hyper-service")]

use std::convert::Infallible;

use hyper::service::Service;
use hyper::{Body, Request, Response, StatusCode};
use treemux::{tree_mux, TreeMux};

async fn handle_func(_: Request<Body>) -> Result<Response<Body>, Infallible> {
    Ok(Response::new(Body::from("HandleFunc!")))
}

async fn echo_path(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let body = format!("Handler {}!", req.uri().path());
    Ok(Response::new(Body::from(body)))
}

async fn not_found(_: Request<Body>) -> Result<Response<Body>, Infallible> {
    let mut res = Response::new(Body::from("not!found!"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    Ok(res)
}

fn request(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

async fn read_body(res: Response<Body>) -> String {
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn tree_mux_dispatch() {
    let mux = tree_mux! {
        "foo/bar" => handle_func,
        "/moo" => handle_func,
        "/moo/*" => echo_path;
        _ => not_found
    }
    .debug(true);

    let cases: &[(&str, StatusCode, &str)] = &[
        ("/foo/bar", StatusCode::OK, "HandleFunc!"),
        ("/foo/meow", StatusCode::NOT_FOUND, "not!found!"),
        ("/moo", StatusCode::OK, "HandleFunc!"),
        ("/moo/meh", StatusCode::OK, "Handler /moo/meh!"),
        ("/moo/", StatusCode::OK, "Handler /moo/!"),
        ("/foo/*", StatusCode::NOT_FOUND, "not!found!"),
    ];

    for &(path, code, body) in cases {
        let res = mux.dispatch(request(path)).await.unwrap();
        assert_eq!(res.status(), code, "path = {:?}", path);
        assert_eq!(read_body(res).await, body, "path = {:?}", path);
    }
}

#[tokio::test]
async fn tree_mux_default_not_found() {
    let mut mux: TreeMux = TreeMux::default();
    mux.route("/hello", handle_func);

    let res = mux.call(request("/missing")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_body(res).await, "404 page not found\n");

    let res = mux.call(request("/hello")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn tree_mux_shared() {
    let shared = tree_mux! {
        "/a/*" => echo_path,
    }
    .into_shared();

    let mut first = shared.clone();
    let mut second = shared.clone();

    let res = first.call(request("/a/1")).await.unwrap();
    assert_eq!(read_body(res).await, "Handler /a/1!");
    let res = second.call(request("/a/2")).await.unwrap();
    assert_eq!(read_body(res).await, "Handler /a/2!");

    assert_eq!(shared.handler("/a/3").1, Some("/a/*"));
    assert_eq!(shared.handler("/b").1, None);
}

#[test]
fn tree_mux_handler_lookup() {
    let mut mux: TreeMux<usize> = TreeMux::new(0);
    mux.handle("/users/*", 1).handle("/users/me", 2);

    assert_eq!(mux.handler("/users/me"), (&1, Some("/users/*")));
    assert_eq!(mux.handler("/users"), (&0, None));
    assert!(mux.try_handle("/users/", 3).is_err());
    assert_eq!(mux.trie().len(), 2);
}
