//! Record API Handlers

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use shared::models::{InfoSheet, RecipeDraft, RecordDetail, RecordSearchResult, SavedRecord};

use crate::auth::CurrentOperator;
use crate::composer;
use crate::core::ServerState;
use crate::services::records;
use crate::sheet::{self, SheetParties};
use crate::utils::{ApiResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub customer_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetFormat {
    #[default]
    Json,
    Text,
    Document,
}

#[derive(Debug, Deserialize)]
pub struct SheetQuery {
    #[serde(default)]
    pub format: SheetFormat,
}

/// POST /api/records - save the confirmed recipe
///
/// The confirmation is consumed; a failed save puts it back.
pub async fn save(
    State(state): State<ServerState>,
    operator: CurrentOperator,
) -> AppResult<ApiResponse<SavedRecord>> {
    let pending = state.sessions.take_confirmed(&operator.id)?;
    let scope = state.scope(&operator);

    let id = match records::save(state.records(), &scope, &pending.recipe).await {
        Ok(id) => id,
        Err(e) => {
            state.sessions.restore(&operator.id, pending);
            return Err(e);
        }
    };
    state.sessions.mark_saved(&operator.id, &id);

    let link = state.share.link(&id)?;
    Ok(ApiResponse::success_with_message(
        records::SAVE_SUCCESS,
        SavedRecord {
            id,
            share_url: link.url,
            qr_image_url: link.qr_image_url,
        },
    ))
}

/// GET /api/records?customer_name= - exact-name search, newest first
pub async fn search(
    State(state): State<ServerState>,
    operator: CurrentOperator,
    Query(query): Query<SearchQuery>,
) -> AppResult<ApiResponse<RecordSearchResult>> {
    let scope = state.scope(&operator);
    let outcome = records::search(state.records(), &scope, &query.customer_name).await?;
    let message = outcome.message();
    Ok(ApiResponse::success_with_message(
        message,
        RecordSearchResult {
            customer_name: query.customer_name.trim().to_string(),
            records: outcome.into_records(),
        },
    ))
}

/// GET /api/records/{id} - record plus the draft it re-populates
pub async fn get_by_id(
    State(state): State<ServerState>,
    operator: CurrentOperator,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<RecordDetail>> {
    let record = records::load(state.records(), &state.scope(&operator), &id).await?;
    let draft = RecipeDraft::from(&record);
    // Loading replaces whatever the form held
    state.sessions.invalidate(&operator.id);
    Ok(ApiResponse::success(RecordDetail { record, draft }))
}

async fn load_sheet(state: &ServerState, operator: &CurrentOperator, id: &str) -> AppResult<InfoSheet> {
    let record = records::load(state.records(), &state.scope(operator), id).await?;
    let draft = RecipeDraft::from(&record);
    let preview = composer::compose(&state.catalog, &draft)?;
    let share = state.share.link(&record.id)?;

    Ok(sheet::build_sheet(
        &state.catalog,
        &preview,
        &record.product_info,
        SheetParties {
            seller: &state.config.seller,
            manufacturer: &state.config.manufacturer,
        },
        Some(share),
    ))
}

/// GET /api/records/{id}/sheet - info sheet of a saved record
pub async fn sheet(
    State(state): State<ServerState>,
    operator: CurrentOperator,
    Path(id): Path<String>,
    Query(query): Query<SheetQuery>,
) -> AppResult<Response> {
    let sheet = load_sheet(&state, &operator, &id).await?;
    let response = match query.format {
        SheetFormat::Json => ApiResponse::success(sheet).into_response(),
        SheetFormat::Text => text_response(sheet::render_text(&sheet)),
        SheetFormat::Document => text_response(sheet::render_document(&sheet)),
    };
    Ok(response)
}

fn text_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

/// GET /api/records/{id}/qr - QR image of the share link
pub async fn qr(
    State(state): State<ServerState>,
    operator: CurrentOperator,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let record = records::load(state.records(), &state.scope(&operator), &id).await?;
    let link = state.share.link(&record.id)?;
    let png = state.qr.fetch_png(&link.qr_image_url).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
