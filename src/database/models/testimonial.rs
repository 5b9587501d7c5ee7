use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require, require_some};
use crate::database::repository::RepositoryError;

/// A client testimonial. `clientImage` is a stored upload path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub review: String,
    pub company: String,
    pub client_image: String,
}

/// `client_image` stays optional at the protocol layer (the upload may be
/// absent); the entity requires it, so `validate` rejects None.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTestimonial {
    pub name: String,
    pub position: String,
    pub review: String,
    pub company: String,
    pub client_image: Option<String>,
}

impl NewTestimonial {
    pub fn validate(&self) -> Result<(), RepositoryError> {
        require("name", &self.name)?;
        require("position", &self.position)?;
        require("review", &self.review)?;
        require("company", &self.company)?;
        require_some("clientImage", self.client_image.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_client_image_is_rejected() {
        let input = NewTestimonial {
            name: "Jo".to_string(),
            position: "CTO".to_string(),
            review: "Great work".to_string(),
            company: "Acme".to_string(),
            client_image: None,
        };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("clientImage"));
    }
}
