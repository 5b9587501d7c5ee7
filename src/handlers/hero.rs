use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::database::models::NewHero;
use crate::error::ApiError;
use crate::state::AppState;
use crate::upload::{self, FieldSpec};

const FILE_FIELDS: &[FieldSpec] = &[FieldSpec { name: "heroImage", max_count: 1 }];

/// GET /hero - list hero records (usually one, but uniqueness is not enforced)
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let heroes = state
        .repository
        .list_heroes()
        .await
        .map_err(|e| super::fetch_error("hero", e))?;
    Ok(Json(heroes))
}

/// POST /create-hero - create a hero record from a multipart form
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::receive(multipart, &state.config.upload_dir, FILE_FIELDS).await?;

    let mut input = form.text_value();
    input["heroImage"] = json!(form.first_file("heroImage"));

    let new: NewHero =
        serde_json::from_value(input).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let hero = state
        .repository
        .insert_hero(&new)
        .await
        .map_err(|e| super::insert_error("hero", e))?;

    tracing::info!(id = %hero.id, "created hero");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Hero created successfully", "hero": hero })),
    ))
}
