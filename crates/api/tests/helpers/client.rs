use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Thin JSON client bound to one test server.
pub struct TestClient {
    base_url: String,
    http_client: Client,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            http_client: Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(self.request(Method::DELETE, path)).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> TestResponse {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> TestResponse {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// Posts `body` verbatim, for payloads that are not valid requests.
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = self
            .request(Method::POST, path)
            .header("Content-Type", "application/json")
            .body(body.to_string());
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn send(&self, request: RequestBuilder) -> TestResponse {
        let response = request.send().await.expect("Failed to reach test server");
        let status = response.status();
        let headers = response.headers().clone();
        // 204 and other empty bodies decode to Null.
        let body = response
            .json::<JsonValue>()
            .await
            .unwrap_or(JsonValue::Null);

        TestResponse {
            status,
            body,
            headers,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: JsonValue,
    pub headers: HeaderMap,
}

impl TestResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// `error.code` of an error body, or `""`.
    pub fn error_code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or_default()
    }

    pub fn rounds(&self) -> &Vec<JsonValue> {
        self.body.as_array().expect("Expected a JSON array of rounds")
    }
}
