use std::sync::Arc;

use crate::api::CacheApi;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CacheApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn CacheApi>) -> Self {
        Self { api }
    }
}
