//! Planet repository for database operations

use common::error::DatabaseResult;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{NewPlanet, Planet};

/// Planet repository for database operations
#[derive(Clone)]
pub struct PlanetRepository {
    pool: SqlitePool,
}

impl PlanetRepository {
    /// Create a new planet repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a planet
    pub async fn create(&self, planet: &NewPlanet) -> DatabaseResult<Planet> {
        info!("Creating new planet: {}", planet.name);

        let created = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, climate, terrain, gravity, diameter, orbital_period,
                                 rotation_period, population, surface_water)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, climate, terrain, gravity, diameter, orbital_period,
                      rotation_period, population, surface_water
            "#,
        )
        .bind(&planet.name)
        .bind(&planet.climate)
        .bind(&planet.terrain)
        .bind(&planet.gravity)
        .bind(&planet.diameter)
        .bind(&planet.orbital_period)
        .bind(&planet.rotation_period)
        .bind(&planet.population)
        .bind(&planet.surface_water)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get all planets
    pub async fn get_all(&self) -> DatabaseResult<Vec<Planet>> {
        let planets = sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, climate, terrain, gravity, diameter, orbital_period,
                   rotation_period, population, surface_water
            FROM planets
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(planets)
    }

    /// Find a planet by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Planet>> {
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, climate, terrain, gravity, diameter, orbital_period,
                   rotation_period, population, surface_water
            FROM planets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(planet)
    }
}
