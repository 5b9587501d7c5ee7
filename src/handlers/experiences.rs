use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::database::models::NewExperience;
use crate::error::ApiError;
use crate::state::AppState;
use crate::upload::{self, FieldSpec};

/// The form surface accepts a client image here, but the entity does not
/// reference it; the file is stored and its path dropped.
const FILE_FIELDS: &[FieldSpec] = &[FieldSpec { name: "clientImage", max_count: 1 }];

/// GET /experiences - list all experience entries
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let experiences = state
        .repository
        .list_experiences()
        .await
        .map_err(|e| super::fetch_error("experiences", e))?;
    Ok(Json(experiences))
}

/// POST /create-experience - create an experience entry from a multipart form
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::receive(multipart, &state.config.upload_dir, FILE_FIELDS).await?;

    let new: NewExperience = serde_json::from_value(form.text_value())
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let experience = state
        .repository
        .insert_experience(&new)
        .await
        .map_err(|e| super::insert_error("experience", e))?;

    tracing::info!(id = %experience.id, "created experience");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Experience created successfully", "experience": experience })),
    ))
}
