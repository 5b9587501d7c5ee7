use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::require;
use crate::database::repository::RepositoryError;

/// Hero banner content. Singleton-like by convention only: nothing stops
/// multiple hero records from coexisting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: Uuid,
    pub age: String,
    pub subtitle: String,
    pub experience: String,
    pub project: String,
    pub happy_client: String,
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewHero {
    pub age: String,
    pub subtitle: String,
    pub experience: String,
    pub project: String,
    pub happy_client: String,
    /// Optional image field
    pub hero_image: Option<String>,
}

impl NewHero {
    pub fn validate(&self) -> Result<(), RepositoryError> {
        require("age", &self.age)?;
        require("subtitle", &self.subtitle)?;
        require("experience", &self.experience)?;
        require("project", &self.project)?;
        require("happyClient", &self.happy_client)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewHero {
        NewHero {
            age: "28".to_string(),
            subtitle: "Software engineer".to_string(),
            experience: "5".to_string(),
            project: "40".to_string(),
            happy_client: "30".to_string(),
            hero_image: None,
        }
    }

    #[test]
    fn hero_image_is_optional() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn missing_happy_client_is_rejected() {
        let input = NewHero { happy_client: String::new(), ..valid() };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("happyClient"));
    }
}
