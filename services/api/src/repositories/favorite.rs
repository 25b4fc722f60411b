//! Favorite repository for the three user/target join tables

use common::error::DatabaseResult;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::models::{Character, Favorite, FavoriteKind, Planet, UserFavorites, Vehicle};

/// Favorite repository for database operations
#[derive(Clone)]
pub struct FavoriteRepository {
    pool: SqlitePool,
}

impl FavoriteRepository {
    /// Create a new favorite repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Link a user to a target entity
    pub async fn add(
        &self,
        kind: FavoriteKind,
        user_id: i64,
        target_id: i64,
    ) -> DatabaseResult<Favorite> {
        info!(
            "Adding {} {} to favorites of user {}",
            kind.label(),
            target_id,
            user_id
        );

        let sql = format!(
            "INSERT INTO {table} (user_id, {column}) VALUES ($1, $2) RETURNING id, user_id, {column} AS target_id",
            table = kind.table(),
            column = kind.target_column(),
        );

        let row = sqlx::query(&sql)
            .bind(user_id)
            .bind(target_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Favorite {
            id: row.get("id"),
            user_id: row.get("user_id"),
            target_id: row.get("target_id"),
            kind,
        })
    }

    /// Unlink a user from a target entity, returning whether a row was removed
    pub async fn remove(
        &self,
        kind: FavoriteKind,
        user_id: i64,
        target_id: i64,
    ) -> DatabaseResult<bool> {
        info!(
            "Removing {} {} from favorites of user {}",
            kind.label(),
            target_id,
            user_id
        );

        let sql = format!(
            "DELETE FROM {table} WHERE user_id = $1 AND {column} = $2",
            table = kind.table(),
            column = kind.target_column(),
        );

        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(target_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Characters a user marked as favorite, oldest first
    pub async fn characters_for_user(&self, user_id: i64) -> DatabaseResult<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT c.id, c.name, c.birth_year, c.eye_color, c.gender, c.hair_color,
                   c.skin_color, c.height, c.mass
            FROM characters c
            JOIN favorite_characters f ON f.character_id = c.id
            WHERE f.user_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(characters)
    }

    /// Planets a user marked as favorite, oldest first
    pub async fn planets_for_user(&self, user_id: i64) -> DatabaseResult<Vec<Planet>> {
        let planets = sqlx::query_as::<_, Planet>(
            r#"
            SELECT p.id, p.name, p.climate, p.terrain, p.gravity, p.diameter, p.orbital_period,
                   p.rotation_period, p.population, p.surface_water
            FROM planets p
            JOIN favorite_planets f ON f.planet_id = p.id
            WHERE f.user_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(planets)
    }

    /// Vehicles a user marked as favorite, oldest first
    pub async fn vehicles_for_user(&self, user_id: i64) -> DatabaseResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.id, v.name, v.model, v.vehicle_class, v.manufacturer, v.cost_in_credits,
                   v.length, v.crew, v.passengers, v.max_atmosphering_speed, v.cargo_capacity,
                   v.consumables
            FROM vehicles v
            JOIN favorite_vehicles f ON f.vehicle_id = v.id
            WHERE f.user_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// All favorites of a user
    pub async fn for_user(&self, user_id: i64) -> DatabaseResult<UserFavorites> {
        Ok(UserFavorites {
            people: self.characters_for_user(user_id).await?,
            planets: self.planets_for_user(user_id).await?,
            vehicles: self.vehicles_for_user(user_id).await?,
        })
    }
}
