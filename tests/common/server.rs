//! Test server lifecycle management
//!
//! Each test gets an isolated server bound to a random port.

use insight_server::server::server::make_app;
use insight_server::server::{RequestsLoggingLevel, ServerConfig};
use tokio::net::TcpListener;

pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,
}

impl TestServer {
    /// Spawns a new test server on a random port.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let app = make_app(ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port,
        });

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server crashed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}
