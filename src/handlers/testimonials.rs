use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::database::models::NewTestimonial;
use crate::error::ApiError;
use crate::state::AppState;
use crate::upload::{self, FieldSpec};

const FILE_FIELDS: &[FieldSpec] = &[FieldSpec { name: "clientImage", max_count: 1 }];

/// GET /testimonials - list all testimonials
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let testimonials = state
        .repository
        .list_testimonials()
        .await
        .map_err(|e| super::fetch_error("testimonials", e))?;
    Ok(Json(testimonials))
}

/// POST /create-testimonial - create a testimonial from a multipart form
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::receive(multipart, &state.config.upload_dir, FILE_FIELDS).await?;

    let mut input = form.text_value();
    // Testimonial images are referenced by their public serving path.
    input["clientImage"] = json!(form.first_file("clientImage").map(|p| format!("/{}", p)));

    let new: NewTestimonial =
        serde_json::from_value(input).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let testimonial = state
        .repository
        .insert_testimonial(&new)
        .await
        .map_err(|e| super::insert_error("testimonial", e))?;

    tracing::info!(id = %testimonial.id, "created testimonial");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Testimonial created successfully", "testimonial": testimonial })),
    ))
}
