use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use shared::config::Config;
use shared::{Error, Result};
use shared_http::api::responses::parse_listing;
use shared_http::api::{CacheListing, DeleteRequest, InsertRequest};
use tracing::{info, warn};

use super::CacheApi;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.api_base_url()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            warn!("Cache API request failed: {}", e);
            Error::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Cache API answered {} for {}", status, response.url());
            return Err(Error::Status(status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl CacheApi for ApiClient {
    async fn delete(&self, req: &DeleteRequest) -> Result<()> {
        let url = self.url("/cache/delete");
        info!("Deleting cache entry {} via {}", req.key, url);
        self.send(self.client.get(&url).query(req)).await?;
        Ok(())
    }

    async fn insert(&self, req: &InsertRequest) -> Result<()> {
        let url = self.url("/cache/insert");
        info!(
            "Inserting cache entry {} {} {} ttl={} via {}",
            req.key, req.record_type, req.value, req.ttl, url
        );
        self.send(self.client.get(&url).query(req)).await?;
        Ok(())
    }

    async fn entries(&self) -> Result<CacheListing> {
        let url = self.url("/cache/all");
        let response = self.send(self.client.get(&url)).await?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        parse_listing(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        extract::{Query, State},
        http::{StatusCode, Uri},
        routing::get,
    };
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

    #[derive(Clone)]
    struct Stub {
        seen: Seen,
        status: StatusCode,
    }

    async fn record(
        State(stub): State<Stub>,
        uri: Uri,
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, &'static str) {
        stub.seen
            .lock()
            .unwrap()
            .push((uri.path().to_string(), params));
        (stub.status, "Successfully done")
    }

    async fn listing(State(stub): State<Stub>) -> (StatusCode, &'static str) {
        (
            stub.status,
            r#"{"google.com.A":{"value":"google.com. 0 IN A 8.8.8.8","ttl":0}}"#,
        )
    }

    async fn spawn_stub(status: StatusCode) -> (ApiClient, Seen) {
        let seen: Seen = Arc::default();
        let router = Router::new()
            .route("/cache/delete", get(record))
            .route("/cache/insert", get(record))
            .route("/cache/all", get(listing))
            .with_state(Stub {
                seen: seen.clone(),
                status,
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (ApiClient::new(format!("http://{}", addr)), seen)
    }

    #[tokio::test]
    async fn test_delete_sends_only_the_key() {
        let (client, seen) = spawn_stub(StatusCode::OK).await;

        client
            .delete(&DeleteRequest::new("google.com.A."))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "/cache/delete");
        assert_eq!(seen[0].1.len(), 1);
        assert_eq!(seen[0].1["key"], "google.com.A.");
    }

    #[tokio::test]
    async fn test_insert_sends_four_params() {
        let (client, seen) = spawn_stub(StatusCode::OK).await;

        client
            .insert(&InsertRequest::new("example.com", "A", "1.2.3.4", "300"))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (path, params) = &seen[0];
        assert_eq!(path, "/cache/insert");
        assert_eq!(params.len(), 4);
        assert_eq!(params["key"], "example.com");
        assert_eq!(params["type"], "A");
        assert_eq!(params["value"], "1.2.3.4");
        assert_eq!(params["ttl"], "300");
    }

    #[tokio::test]
    async fn test_empty_fields_are_forwarded_as_is() {
        let (client, seen) = spawn_stub(StatusCode::OK).await;

        client
            .insert(&InsertRequest::new("", "A", "", ""))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].1.len(), 4);
        assert_eq!(seen[0].1["key"], "");
        assert_eq!(seen[0].1["ttl"], "");
    }

    #[tokio::test]
    async fn test_bad_request_is_a_status_error() {
        let (client, _) = spawn_stub(StatusCode::BAD_REQUEST).await;

        let result = client.delete(&DeleteRequest::new("missing.A.")).await;

        assert!(matches!(result, Err(Error::Status(400))));
        assert!(result.unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_unreachable_api_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{}", addr));
        let result = client
            .insert(&InsertRequest::new("example.com", "A", "1.2.3.4", 300))
            .await;

        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn test_entries_decodes_listing() {
        let (client, _) = spawn_stub(StatusCode::OK).await;

        let listing = client.entries().await.unwrap();

        assert_eq!(listing.len(), 1);
        assert_eq!(listing["google.com.A"].ttl, 0);
    }

    #[test]
    fn test_from_config_builds_http_base_url() {
        let config = Config::default().with_api_address("127.0.0.1:8282");
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8282");
    }
}
