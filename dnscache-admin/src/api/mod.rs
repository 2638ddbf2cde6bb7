mod client;

pub use client::ApiClient;

use async_trait::async_trait;
use shared::Result;
use shared_http::api::{CacheListing, DeleteRequest, InsertRequest};

/// Port for the remote cache REST API.
///
/// Success means the API answered 2xx; response bodies of `delete` and
/// `insert` are not inspected.
#[async_trait]
pub trait CacheApi: Send + Sync + 'static {
    async fn delete(&self, req: &DeleteRequest) -> Result<()>;
    async fn insert(&self, req: &InsertRequest) -> Result<()>;
    async fn entries(&self) -> Result<CacheListing>;
}
