mod experience;
mod hero;
mod project;
mod testimonial;

pub use experience::{Experience, NewExperience};
pub use hero::{Hero, NewHero};
pub use project::{NewProject, Project};
pub use testimonial::{NewTestimonial, Testimonial};

use crate::database::repository::RepositoryError;

/// Required fields must be present and non-empty; field names in errors use
/// the wire (camelCase) form.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::missing(field));
    }
    Ok(())
}

pub(crate) fn require_some(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), RepositoryError> {
    require(field, value.unwrap_or_default())
}
