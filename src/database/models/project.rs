use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require, require_some};
use crate::database::repository::RepositoryError;

/// A persisted project. `images` and `coverImage` hold forward-slash relative
/// paths into the upload directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub duration: String,
    pub team_size: String,
    pub description: String,
    pub complexity: String,
    pub technologies: String,
    pub images: Vec<String>,
    pub cover_image: String,
}

/// Input for a new project: text fields from the multipart form, image paths
/// merged in from the upload step. Missing text fields deserialize as empty
/// and are rejected by `validate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    pub name: String,
    pub role: String,
    pub duration: String,
    pub team_size: String,
    pub description: String,
    pub complexity: String,
    pub technologies: String,
    /// May be empty if no files were attached
    pub images: Vec<String>,
    pub cover_image: Option<String>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), RepositoryError> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        require("duration", &self.duration)?;
        require("teamSize", &self.team_size)?;
        require("description", &self.description)?;
        require("complexity", &self.complexity)?;
        require("technologies", &self.technologies)?;
        require_some("coverImage", self.cover_image.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewProject {
        NewProject {
            name: "Portfolio".to_string(),
            role: "Full-stack".to_string(),
            duration: "3 months".to_string(),
            team_size: "2".to_string(),
            description: "A portfolio site".to_string(),
            complexity: "Medium".to_string(),
            technologies: "Rust, Postgres".to_string(),
            images: vec!["uploads/1-a.png".to_string()],
            cover_image: Some("uploads/2-b.png".to_string()),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn empty_images_is_allowed() {
        let input = NewProject { images: vec![], ..valid() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn missing_name_is_rejected() {
        let input = NewProject { name: String::new(), ..valid() };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn missing_cover_image_is_rejected() {
        let input = NewProject { cover_image: None, ..valid() };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("coverImage"));
    }

    #[test]
    fn deserializes_with_camel_case_names() {
        let input: NewProject = serde_json::from_value(serde_json::json!({
            "name": "Portfolio",
            "teamSize": "2",
            "coverImage": "uploads/2-b.png"
        }))
        .unwrap();
        assert_eq!(input.team_size, "2");
        assert_eq!(input.cover_image.as_deref(), Some("uploads/2-b.png"));
        // Unsupplied fields default to empty rather than failing deserialization.
        assert!(input.role.is_empty());
    }
}
