//! Paper handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::parse_id;
use crate::extract::RequestBody;
use crate::validation::PAPER_FIELDS;
use crate::AppState;
use publications_common::{
    db::{models::Paper, NewPaper},
    errors::{AppError, Result},
    metrics,
};

/// Response after inserting a row
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// List every paper
#[instrument(skip(state))]
pub async fn list_papers(State(state): State<AppState>) -> Result<Json<Vec<Paper>>> {
    let papers = state.store.list_papers().await?;
    Ok(Json(papers))
}

/// Get the papers matching an id
pub async fn get_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Paper>>> {
    let paper_id = parse_id(&id)?;
    let papers = state.store.find_papers_by_id(paper_id).await?;

    if papers.is_empty() {
        return Err(AppError::paper_not_found(&id));
    }

    Ok(Json(papers))
}

/// Create a new paper
#[instrument(skip(state, body))]
pub async fn create_paper(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    PAPER_FIELDS.check(&body)?;

    let paper = NewPaper {
        title: PAPER_FIELDS.string(&body, "title")?,
        author: PAPER_FIELDS.string(&body, "author")?,
    };

    let id = state.store.insert_paper(paper).await?;
    metrics::record_paper_created();

    tracing::info!(paper_id = id, "Paper created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
