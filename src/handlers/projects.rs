use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::database::models::NewProject;
use crate::database::record_id::RecordId;
use crate::error::ApiError;
use crate::state::AppState;
use crate::upload::{self, FieldSpec};

/// Allow up to ten project screenshots plus a single cover image.
const FILE_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "images", max_count: 10 },
    FieldSpec { name: "coverImage", max_count: 1 },
];

/// GET /projects - list all projects
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let projects = state
        .repository
        .list_projects()
        .await
        .map_err(|e| super::fetch_error("projects", e))?;
    Ok(Json(projects))
}

/// GET /projects/:id - fetch a single project by identifier
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // Malformed identifiers are a client error, distinct from not-found.
    let id = RecordId::parse(&id).ok_or_else(|| ApiError::bad_request("Invalid project id"))?;

    let project = state
        .repository
        .find_project(id)
        .await
        .map_err(|e| super::fetch_error("project", e))?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(Json(project))
}

/// POST /create-project - create a project from a multipart form
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::receive(multipart, &state.config.upload_dir, FILE_FIELDS).await?;

    let mut input = form.text_value();
    input["images"] = json!(form.file_paths("images"));
    input["coverImage"] = json!(form.first_file("coverImage"));

    let new: NewProject =
        serde_json::from_value(input).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let project = state
        .repository
        .insert_project(&new)
        .await
        .map_err(|e| super::insert_error("project", e))?;

    tracing::info!(id = %project.id, images = project.images.len(), "created project");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Project created successfully", "project": project })),
    ))
}
