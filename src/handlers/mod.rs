pub mod experiences;
pub mod hero;
pub mod projects;
pub mod testimonials;

use crate::database::repository::RepositoryError;
use crate::error::ApiError;

/// Translate a repository failure on insert into the wire error for the
/// route: missing required fields are the caller's mistake (400), everything
/// else surfaces as a 500 with the underlying error text.
pub(crate) fn insert_error(entity: &str, err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::Validation(detail) => ApiError::validation(detail),
        other => {
            tracing::error!("error creating {}: {}", entity, other);
            ApiError::internal(format!("Error creating {}", entity), other)
        }
    }
}

pub(crate) fn fetch_error(entity: &str, err: RepositoryError) -> ApiError {
    tracing::error!("error fetching {}: {}", entity, err);
    ApiError::internal(format!("Error fetching {}", entity), err)
}
