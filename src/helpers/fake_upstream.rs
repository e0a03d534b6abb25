//! Local stand-in for third-party HTTP APIs in tests

use std::net::TcpListener;
use axum::Router;

/// Serves `router` on an ephemeral port and returns its base url
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());
    tokio::spawn(server);

    format!("http://{}", addr)
}
