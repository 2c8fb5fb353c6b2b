//! Read-side route handlers: random, all, and search.

use axum::Json;
use axum::extract::{Query, State};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::CafeRepository;
use crate::error::{ApiError, Result};
use crate::models::Cafe;
use crate::state::AppState;

/// Response payload wrapping a single cafe.
#[derive(Debug, Serialize)]
pub struct CafePayload {
    pub cafe: Cafe,
}

/// Response payload wrapping a list of cafes.
#[derive(Debug, Serialize)]
pub struct CafesPayload {
    pub cafes: Vec<Cafe>,
}

/// Query parameters for `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub location: Option<String>,
}

/// Pick one cafe uniformly at random.
///
/// An empty store answers 404.
#[instrument(skip(state))]
pub async fn random(State(state): State<AppState>) -> Result<Json<CafePayload>> {
    let cafes = CafeRepository::new(state.pool()).all().await?;
    let cafe = cafes
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| ApiError::NotFound("no cafes in the database".to_owned()))?;
    Ok(Json(CafePayload { cafe }))
}

/// List every cafe.
#[instrument(skip(state))]
pub async fn all(State(state): State<AppState>) -> Result<Json<CafesPayload>> {
    let cafes = CafeRepository::new(state.pool()).all().await?;
    Ok(Json(CafesPayload { cafes }))
}

/// Find cafes by exact location match.
///
/// An empty match set answers 400, not 404 - existing clients depend on it.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<CafesPayload>> {
    let Some(location) = params.location else {
        return Err(ApiError::BadRequest(
            "location parameter is missing".to_owned(),
        ));
    };

    let cafes = CafeRepository::new(state.pool())
        .find_by_location(&location)
        .await?;

    if cafes.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "no cafe was found in {location}"
        )));
    }

    Ok(Json(CafesPayload { cafes }))
}
