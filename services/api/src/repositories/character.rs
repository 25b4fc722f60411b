//! Character repository for database operations

use common::error::DatabaseResult;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{Character, NewCharacter};

/// Character repository for database operations
#[derive(Clone)]
pub struct CharacterRepository {
    pool: SqlitePool,
}

impl CharacterRepository {
    /// Create a new character repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a character
    pub async fn create(&self, character: &NewCharacter) -> DatabaseResult<Character> {
        info!("Creating new character: {}", character.name);

        let created = sqlx::query_as::<_, Character>(
            r#"
            INSERT INTO characters (name, birth_year, eye_color, gender, hair_color, skin_color, height, mass)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, birth_year, eye_color, gender, hair_color, skin_color, height, mass
            "#,
        )
        .bind(&character.name)
        .bind(&character.birth_year)
        .bind(&character.eye_color)
        .bind(&character.gender)
        .bind(&character.hair_color)
        .bind(&character.skin_color)
        .bind(character.height)
        .bind(character.mass)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get all characters
    pub async fn get_all(&self) -> DatabaseResult<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, name, birth_year, eye_color, gender, hair_color, skin_color, height, mass
            FROM characters
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(characters)
    }

    /// Find a character by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Character>> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, name, birth_year, eye_color, gender, hair_color, skin_color, height, mass
            FROM characters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }
}
