pub mod models;
pub mod record_id;
pub mod repository;

use sqlx::{postgres::PgPoolOptions, PgPool};

/// One `CREATE TABLE IF NOT EXISTS` per entity collection. Required columns
/// are NOT NULL at the store, but the repository re-validates presence itself
/// so the contract holds regardless of backend.
const SCHEMA: &[&str] = &[
    "CREATE EXTENSION IF NOT EXISTS pgcrypto",
    "CREATE TABLE IF NOT EXISTS projects (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        role TEXT NOT NULL,
        duration TEXT NOT NULL,
        team_size TEXT NOT NULL,
        description TEXT NOT NULL,
        complexity TEXT NOT NULL,
        technologies TEXT NOT NULL,
        images TEXT[] NOT NULL DEFAULT '{}',
        cover_image TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS experiences (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        duration TEXT NOT NULL,
        role TEXT NOT NULL,
        company TEXT NOT NULL,
        location TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS testimonials (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        position TEXT NOT NULL,
        review TEXT NOT NULL,
        company TEXT NOT NULL,
        client_image TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS heroes (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        age TEXT NOT NULL,
        subtitle TEXT NOT NULL,
        experience TEXT NOT NULL,
        project TEXT NOT NULL,
        happy_client TEXT NOT NULL,
        hero_image TEXT
    )",
];

/// Connect to the store and ping it. Called once at startup; a failure here
/// is fatal and the process exits without retry.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    Ok(pool)
}

/// Create the entity tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
