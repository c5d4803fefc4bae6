//! Common test utilities and helpers
//!
//! - City fixtures matching the backend's JSON
//! - Builders for components bound to a mock server
//! - `eventually` for waiting on results polled from the UI side

#![allow(dead_code)]

use std::time::Duration;

use citydesk::egui_app::{ApiClient, Config, DebugLogger};
use citydesk::shared::AppConfig;
use serde_json::{json, Value};

/// City JSON as served by the backend, including fields the client ignores.
pub fn city_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "coordinates": { "id": 10, "x": 12.5, "y": -3.25 },
        "creationDate": "2024-11-02",
        "area": 310,
        "population": 1250000,
        "establishmentDate": "1901-05-01T00:00:00Z",
        "capital": true,
        "metersAboveSeaLevel": 115,
        "carCode": 77,
        "agglomeration": 4800000,
        "climate": "MONSOON",
        "governor": { "id": 4, "height": 182.5 },
        "user": { "id": 1, "username": "owner" }
    })
}

pub fn api_for(server_uri: &str) -> ApiClient {
    let config = Config::with_builder(AppConfig::builder().server_url(server_uri))
        .expect("mock server uri is a valid url");
    ApiClient::new(config)
}

/// An address nothing listens on, for transport failures.
pub fn unreachable_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn logger() -> DebugLogger {
    DebugLogger::new(200)
}

/// Poll `check` until it returns true or two seconds pass.
pub async fn eventually<F: FnMut() -> bool>(mut check: F) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// Keep polling for `duration` without expecting anything.
pub async fn settle<F: FnMut()>(duration: Duration, mut poll: F) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::Instant::now() < deadline {
        poll();
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    poll();
}
