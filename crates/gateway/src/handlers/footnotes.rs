//! Footnote handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use super::papers::CreatedResponse;
use super::parse_id;
use crate::extract::RequestBody;
use crate::validation::FOOTNOTE_FIELDS;
use crate::AppState;
use publications_common::{
    db::{models::Footnote, NewFootnote},
    errors::{AppError, Result},
    metrics,
};

/// List every footnote across all papers
#[instrument(skip(state))]
pub async fn list_footnotes(State(state): State<AppState>) -> Result<Json<Vec<Footnote>>> {
    let footnotes = state.store.list_footnotes().await?;
    Ok(Json(footnotes))
}

/// Get the footnotes attached to a paper
pub async fn get_footnotes_for_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Footnote>>> {
    let paper_id = parse_id(&id)?;
    let footnotes = state.store.find_footnotes_by_paper_id(paper_id).await?;

    if footnotes.is_empty() {
        return Err(AppError::footnotes_not_found(&id));
    }

    Ok(Json(footnotes))
}

/// Create a footnote
///
/// The referenced paper is not looked up here; a dangling `paper_id` is
/// rejected by the foreign key and surfaces as a storage error.
#[instrument(skip(state, body))]
pub async fn create_footnote(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    FOOTNOTE_FIELDS.check(&body)?;

    let footnote = NewFootnote {
        note: FOOTNOTE_FIELDS.string(&body, "note")?,
        paper_id: FOOTNOTE_FIELDS.integer(&body, "paper_id")?,
    };

    let paper_id = footnote.paper_id;
    let id = state.store.insert_footnote(footnote).await?;
    metrics::record_footnote_created();

    tracing::info!(footnote_id = id, paper_id, "Footnote created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
