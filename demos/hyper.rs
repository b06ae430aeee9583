use treemux::tree_mux;

use std::convert::Infallible as Never;
use std::net::SocketAddr;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response, StatusCode};

async fn not_found(req: Request<Body>) -> Result<Response<Body>, Never> {
    let mut res = Response::new(Body::from(format!("no route for {}", req.uri().path())));
    *res.status_mut() = StatusCode::NOT_FOUND;
    Ok(res)
}

async fn hello(_: Request<Body>) -> Result<Response<Body>, Never> {
    Ok(Response::new(Body::from("hello!")))
}

async fn city(req: Request<Body>) -> Result<Response<Body>, Never> {
    let name = req.uri().path().rsplit('/').next().unwrap_or_default();
    Ok(Response::new(Body::from(format!("welcome to {}", name))))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mux = tree_mux! {
        "/hello" => hello,
        "/countries/*/cities/*" => city;
        _ => not_found
    }
    .debug(true)
    .into_shared();

    let make = make_service_fn(move |_| {
        let mux = mux.clone();
        async move { Ok::<_, Never>(mux) }
    });

    let addr: SocketAddr = ([127, 0, 0, 1], 3000).into();

    let server = hyper::Server::bind(&addr).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello", addr);
    println!("city: http://{}/countries/belgium/cities/wommelgem", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    if let Err(e) = server.await {
        eprintln!("server error: {}", e);
    }
}
