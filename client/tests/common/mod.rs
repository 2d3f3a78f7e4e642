//! Fake backend shared by the contract tests.
//!
//! Each test builds an axum `Router` describing the server behavior it
//! needs, serves it on an ephemeral local port, and points a real
//! `ApiClient` at it. `Hits` counts requests per route so tests can assert
//! that client-side checks really skipped the network.

#![allow(dead_code)]

use axum::http::HeaderMap;
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use vidvest_client::{ApiClient, ClientConfig, SessionStore};

pub const TOKEN: &str = "tok-123";

/// Per-route request counter
#[derive(Default)]
pub struct Hits {
    counts: Mutex<HashMap<&'static str, usize>>,
}

impl Hits {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record(&self, route: &'static str) {
        *self.counts.lock().entry(route).or_default() += 1;
    }

    pub fn count(&self, route: &'static str) -> usize {
        self.counts.lock().get(route).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.lock().values().sum()
    }
}

/// Serve `router` on 127.0.0.1 and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake backend crashed");
    });
    format!("http://{}/api", addr)
}

/// A base URL nothing listens on.
pub async fn dead_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// Logged-out client with an in-memory session.
pub fn client(base_url: &str) -> (Arc<ApiClient>, Arc<SessionStore>) {
    let config = ClientConfig::new(base_url).expect("valid test URL");
    let session = Arc::new(SessionStore::in_memory());
    (Arc::new(ApiClient::new(&config, session.clone())), session)
}

/// Client whose session already holds [`TOKEN`].
pub fn logged_in_client(base_url: &str) -> (Arc<ApiClient>, Arc<SessionStore>) {
    let (api, session) = client(base_url);
    session
        .set_session(TOKEN.to_string(), serde_json::from_value(user_json(1, 1)).unwrap())
        .unwrap();
    (api, session)
}

pub fn user_json(id: i64, user_type_id: i64) -> Value {
    json!({
        "id": id,
        "username": format!("user{id}"),
        "name": format!("User {id}"),
        "bio": null,
        "phone": null,
        "user_type_id": user_type_id,
        "profile_photo_url": null
    })
}

pub fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}
