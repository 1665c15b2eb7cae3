//! Thin HTTP client wrapper used by the end-to-end tests.

use serde_json::Value;

pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_home(&self) -> reqwest::Response {
        self.client
            .get(&self.base_url)
            .send()
            .await
            .expect("GET / failed")
    }

    pub async fn post_insight(&self, body: Value) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/insight", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("POST /v1/insight failed")
    }
}
