//! Write-side route handlers: add, update-price, replace, and delete.
//!
//! `/add` is open; `/replace-cafe/{id}` and `/delete-cafe/{id}` require the
//! API key via the [`RequireApiKey`] extractor, so a bad key answers 401
//! before the handler body runs.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use cafe_api_core::CafeId;

use crate::db::CafeRepository;
use crate::error::{ApiError, Result};
use crate::middleware::auth::RequireApiKey;
use crate::models::CafeFields;
use crate::state::AppState;

/// Response payload carrying a success message.
#[derive(Debug, Serialize)]
pub struct SuccessPayload {
    pub success: String,
}

/// Query parameters for `/update-price/{id}`.
#[derive(Debug, Deserialize)]
pub struct PriceParams {
    pub coffee_price: String,
}

fn not_found(id: CafeId) -> ApiError {
    ApiError::NotFound(format!("no cafe with id {id} was found in the database"))
}

/// Create a cafe from query parameters.
#[instrument(skip_all)]
pub async fn add(
    State(state): State<AppState>,
    fields: std::result::Result<Query<CafeFields>, QueryRejection>,
) -> Result<Json<SuccessPayload>> {
    let Query(fields) = fields?;

    let id = CafeRepository::new(state.pool()).insert(&fields).await?;
    tracing::info!(%id, name = %fields.name, "Cafe added");

    Ok(Json(SuccessPayload {
        success: "successfully added the cafe".to_owned(),
    }))
}

/// Update only the coffee price of a cafe.
#[instrument(skip_all, fields(id = %id))]
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<CafeId>,
    params: std::result::Result<Query<PriceParams>, QueryRejection>,
) -> Result<Json<SuccessPayload>> {
    let Query(params) = params?;

    let updated = CafeRepository::new(state.pool())
        .update_price(id, &params.coffee_price)
        .await?;
    if !updated {
        return Err(not_found(id));
    }

    Ok(Json(SuccessPayload {
        success: "price updated successfully".to_owned(),
    }))
}

/// Overwrite every mutable field of a cafe.
#[instrument(skip_all, fields(id = %id))]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<CafeId>,
    _auth: RequireApiKey,
    fields: std::result::Result<Query<CafeFields>, QueryRejection>,
) -> Result<Json<SuccessPayload>> {
    let Query(fields) = fields?;

    let replaced = CafeRepository::new(state.pool()).replace(id, &fields).await?;
    if !replaced {
        return Err(not_found(id));
    }

    Ok(Json(SuccessPayload {
        success: "cafe replaced successfully".to_owned(),
    }))
}

/// Delete a cafe.
#[instrument(skip_all, fields(id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<CafeId>,
    _auth: RequireApiKey,
) -> Result<Json<SuccessPayload>> {
    let deleted = CafeRepository::new(state.pool()).delete(id).await?;
    if !deleted {
        return Err(not_found(id));
    }

    Ok(Json(SuccessPayload {
        success: format!("cafe with id {id} has been deleted"),
    }))
}
