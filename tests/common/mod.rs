//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use music_composer::config::ComposerConfig;
use music_composer::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with default configuration.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(ComposerConfig::default()).await
}

/// Start the service with the given configuration, overriding the listener
/// to an ephemeral loopback port.
pub async fn spawn_app_with(mut config: ComposerConfig) -> TestApp {
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;

    let server = HttpServer::new(config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestApp {
        addr,
        shutdown,
        client,
    }
}
