use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::require;
use crate::database::repository::RepositoryError;

/// A work experience entry. Pure text record, no file references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub duration: String,
    pub role: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExperience {
    pub duration: String,
    pub role: String,
    pub company: String,
    pub location: String,
}

impl NewExperience {
    pub fn validate(&self) -> Result<(), RepositoryError> {
        require("duration", &self.duration)?;
        require("role", &self.role)?;
        require("company", &self.company)?;
        require("location", &self.location)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        let input = NewExperience {
            duration: "2020-2022".to_string(),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: String::new(),
        };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let input = NewExperience {
            duration: "2020-2022".to_string(),
            role: "   ".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
        };
        assert!(input.validate().is_err());
    }
}
