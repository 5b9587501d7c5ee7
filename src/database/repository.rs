use sqlx::PgPool;
use thiserror::Error;

use crate::database::models::{
    Experience, Hero, NewExperience, NewHero, NewProject, NewTestimonial, Project, Testimonial,
};
use crate::database::record_id::RecordId;

/// Errors from the content repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl RepositoryError {
    pub(crate) fn missing(field: &'static str) -> Self {
        RepositoryError::Validation(format!("missing required field: {}", field))
    }
}

/// Typed persistence facade over the four content collections. Owns the
/// identifier-to-record mapping exclusively; callers never cache records
/// across requests. Records are create-only: no update or delete is exposed.
///
/// Required fields are validated here, before any SQL, independent of the
/// store's own column constraints. Lists apply no explicit sort; insertion
/// order is the de facto but not guaranteed order.
#[derive(Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ── Projects ─────────────────────────────────────────────────────

    pub async fn insert_project(&self, new: &NewProject) -> Result<Project, RepositoryError> {
        new.validate()?;
        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects
                (name, role, duration, team_size, description, complexity, technologies, images, cover_image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.role)
        .bind(&new.duration)
        .bind(&new.team_size)
        .bind(&new.description)
        .bind(&new.complexity)
        .bind(&new.technologies)
        .bind(&new.images)
        .bind(new.cover_image.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(project)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, RepositoryError> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects")
            .fetch_all(&self.pool)
            .await?;
        Ok(projects)
    }

    /// Lookup by validated identifier. Callers must parse the external string
    /// into a [`RecordId`] first; this method never sees malformed input.
    pub async fn find_project(&self, id: RecordId) -> Result<Option<Project>, RepositoryError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(project)
    }

    // ── Experiences ──────────────────────────────────────────────────

    pub async fn insert_experience(
        &self,
        new: &NewExperience,
    ) -> Result<Experience, RepositoryError> {
        new.validate()?;
        let experience = sqlx::query_as::<_, Experience>(
            "INSERT INTO experiences (duration, role, company, location)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&new.duration)
        .bind(&new.role)
        .bind(&new.company)
        .bind(&new.location)
        .fetch_one(&self.pool)
        .await?;
        Ok(experience)
    }

    pub async fn list_experiences(&self) -> Result<Vec<Experience>, RepositoryError> {
        let experiences = sqlx::query_as::<_, Experience>("SELECT * FROM experiences")
            .fetch_all(&self.pool)
            .await?;
        Ok(experiences)
    }

    // ── Testimonials ─────────────────────────────────────────────────

    pub async fn insert_testimonial(
        &self,
        new: &NewTestimonial,
    ) -> Result<Testimonial, RepositoryError> {
        new.validate()?;
        let testimonial = sqlx::query_as::<_, Testimonial>(
            "INSERT INTO testimonials (name, position, review, company, client_image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.position)
        .bind(&new.review)
        .bind(&new.company)
        .bind(new.client_image.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(testimonial)
    }

    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        let testimonials = sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials")
            .fetch_all(&self.pool)
            .await?;
        Ok(testimonials)
    }

    // ── Hero ─────────────────────────────────────────────────────────

    pub async fn insert_hero(&self, new: &NewHero) -> Result<Hero, RepositoryError> {
        new.validate()?;
        let hero = sqlx::query_as::<_, Hero>(
            "INSERT INTO heroes (age, subtitle, experience, project, happy_client, hero_image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&new.age)
        .bind(&new.subtitle)
        .bind(&new.experience)
        .bind(&new.project)
        .bind(&new.happy_client)
        .bind(new.hero_image.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(hero)
    }

    pub async fn list_heroes(&self) -> Result<Vec<Hero>, RepositoryError> {
        let heroes = sqlx::query_as::<_, Hero>("SELECT * FROM heroes")
            .fetch_all(&self.pool)
            .await?;
        Ok(heroes)
    }
}
