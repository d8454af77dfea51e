//! Shared harness: serves the real router on an ephemeral port.

#![allow(dead_code)]

use nz_walks_api::transport::http::{create_router, AppState};
use nz_walks_api::{CatalogPolicies, Stores};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn(stores: Stores, policies: CatalogPolicies) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let router = create_router(AppState::new(stores, policies));
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server exited");
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        handle,
    }
}

pub async fn spawn_in_memory() -> TestServer {
    spawn(Stores::in_memory(), CatalogPolicies::default()).await
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.expect("GET")
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST")
    }

    pub async fn put(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE")
    }

    /// Creates a resource and returns its body; panics unless the response is 201.
    pub async fn create(&self, collection: &str, body: Value) -> Value {
        let response = self.post(collection, &body).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED, "creating {collection}");
        response.json().await.expect("created body")
    }

    pub async fn create_otago(&self) -> Value {
        self.create(
            "/Regions",
            json!({"Name": "Otago", "Code": "OTA", "Lat": -45.0, "Long": 170.5}),
        )
        .await
    }

    pub async fn create_difficulty(&self, code: &str) -> Value {
        self.create("/WalkDifficulties", json!({ "Code": code })).await
    }
}

pub fn id_of(resource: &Value) -> String {
    resource["Id"].as_str().expect("resource Id").to_string()
}
