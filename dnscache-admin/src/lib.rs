pub mod api;
pub mod dialog;
pub mod messages;
pub mod page;
pub mod panel;
pub mod web;

// Re-export key types
pub use api::{ApiClient, CacheApi};
pub use panel::{AdminPanel, DeleteOutcome, InsertOutcome};
