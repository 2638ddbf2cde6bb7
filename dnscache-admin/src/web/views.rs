use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use shared_http::api::{EntryRow, RecordType};
use strum::IntoEnumIterator;

use crate::messages::Message;

/// The listing with per-row delete controls, the add form and any toasts
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub entries: Vec<EntryRow>,
    pub record_types: Vec<String>,
    pub notices: Vec<&'static str>,
    pub confirm_prompt: &'static str,
}

impl IndexView {
    pub fn new(entries: Vec<EntryRow>, notice: Option<Message>) -> Self {
        Self {
            entries,
            record_types: RecordType::iter().map(|t| t.to_string()).collect(),
            notices: notice.iter().map(Message::text).collect(),
            confirm_prompt: Message::ConfirmDelete.text(),
        }
    }
}

pub fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template rendering failed: {}", e);
            internal_error(&e.to_string())
        }
    }
}

pub fn internal_error(details: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("500 - Internal Server Error!\n{}", details),
    )
        .into_response()
}
