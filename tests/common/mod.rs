//! Shared utilities for integration tests.

use std::net::SocketAddr;

use matrix_service::{HttpServer, RouteTable, ServiceConfig, Shutdown};
use reqwest::multipart::{Form, Part};

/// A running server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(ServiceConfig::default()).await
    }

    pub async fn start_with(config: ServiceConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server_shutdown = shutdown.subscribe();
        let server = HttpServer::new(config, RouteTable::standard());
        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });

        Self { addr, shutdown }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// A form carrying `content` as the `file` field, like a browser upload.
pub fn csv_form(content: &str) -> Form {
    let part = Part::text(content.to_string())
        .file_name("test.csv")
        .mime_str("text/csv")
        .unwrap();
    Form::new().part("file", part)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
