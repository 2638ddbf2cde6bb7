use std::str::FromStr;

use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use shared_http::api::{EntryRow, HealthResponse};
use tracing::{error, info};

use crate::dialog::{FormAnswer, Toasts};
use crate::messages::Message;
use crate::page::{AddForm, DeleteControl, ReloadFlag};
use crate::panel::{AdminPanel, DeleteOutcome};
use crate::web::state::AppState;
use crate::web::views::{IndexView, internal_error, render_template};

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub key: String,
    #[serde(default)]
    pub answer: String,
}

impl DeleteForm {
    fn confirmed(&self) -> bool {
        self.answer == "yes"
    }
}

/// GET /health
pub async fn health_check() -> Result<Json<HealthResponse>, StatusCode> {
    Ok(Json(HealthResponse {
        message: "OK".into(),
    }))
}

/// GET /
pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Response {
    // Unknown notice ids are dropped rather than rejected
    let notice = query
        .notice
        .as_deref()
        .and_then(|id| Message::from_str(id).ok());

    match state.api.entries().await {
        Ok(listing) => render_template(IndexView::new(EntryRow::from_listing(listing), notice)),
        Err(e) => {
            error!("Failed to load cache entries: {}", e);
            internal_error(&e.to_string())
        }
    }
}

/// POST /delete
pub async fn delete_entry(State(state): State<AppState>, Form(form): Form<DeleteForm>) -> Response {
    info!("DELETE: key={}, answer={}", form.key, form.answer);

    let panel = AdminPanel::new(
        state.api.clone(),
        FormAnswer(form.confirmed()),
        Toasts::default(),
    );
    let mut page = ReloadFlag::default();

    let outcome = panel
        .on_delete_click(&DeleteControl::new(form.key), &mut page)
        .await;

    if outcome == DeleteOutcome::Cancelled {
        return StatusCode::NO_CONTENT.into_response();
    }
    reload(&page, panel.notification())
}

/// POST /add
pub async fn add_entry(State(state): State<AppState>, Form(form): Form<AddForm>) -> Response {
    info!("ADD: key={}, type={}", form.url, form.record_type);

    let panel = AdminPanel::new(state.api.clone(), FormAnswer(true), Toasts::default());
    let mut page = ReloadFlag::default();

    panel.on_add_submit(&form, &mut page).await;

    reload(&page, panel.notification())
}

/// Turn a requested reload into a redirect to the listing, carrying the latest toast
fn reload(page: &ReloadFlag, toasts: &Toasts) -> Response {
    if !page.requested() {
        return StatusCode::NO_CONTENT.into_response();
    }

    match toasts.latest() {
        Some(message) => Redirect::to(&format!("/?notice={}", message.as_ref())).into_response(),
        None => Redirect::to("/").into_response(),
    }
}
