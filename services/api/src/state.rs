//! Application state shared across handlers

use sqlx::SqlitePool;

use crate::repositories::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository, VehicleRepository,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repository: UserRepository,
    pub character_repository: CharacterRepository,
    pub planet_repository: PlanetRepository,
    pub vehicle_repository: VehicleRepository,
    pub favorite_repository: FavoriteRepository,
}

impl AppState {
    /// Build every repository on top of one pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            character_repository: CharacterRepository::new(pool.clone()),
            planet_repository: PlanetRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            favorite_repository: FavoriteRepository::new(pool.clone()),
            db_pool: pool,
        }
    }
}
