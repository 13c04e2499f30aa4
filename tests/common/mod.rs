//! Shared utilities for integration testing.

use tokio::net::TcpListener;
use webdemo::config::ServerConfig;
use webdemo::http::HttpServer;

/// Start the server on an ephemeral port and return its base URL.
/// The listener is bound before the server task is spawned, so requests
/// issued immediately after this returns are queued, not refused.
pub async fn start_server(config: ServerConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}
