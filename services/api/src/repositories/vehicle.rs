//! Vehicle repository for database operations

use common::error::DatabaseResult;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{NewVehicle, Vehicle};

/// Vehicle repository for database operations
#[derive(Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    /// Create a new vehicle repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a vehicle
    pub async fn create(&self, vehicle: &NewVehicle) -> DatabaseResult<Vehicle> {
        info!("Creating new vehicle: {}", vehicle.name);

        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (name, model, vehicle_class, manufacturer, cost_in_credits, length,
                                  crew, passengers, max_atmosphering_speed, cargo_capacity, consumables)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, model, vehicle_class, manufacturer, cost_in_credits, length,
                      crew, passengers, max_atmosphering_speed, cargo_capacity, consumables
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.model)
        .bind(&vehicle.vehicle_class)
        .bind(&vehicle.manufacturer)
        .bind(&vehicle.cost_in_credits)
        .bind(&vehicle.length)
        .bind(&vehicle.crew)
        .bind(&vehicle.passengers)
        .bind(&vehicle.max_atmosphering_speed)
        .bind(&vehicle.cargo_capacity)
        .bind(&vehicle.consumables)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get all vehicles
    pub async fn get_all(&self) -> DatabaseResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, name, model, vehicle_class, manufacturer, cost_in_credits, length,
                   crew, passengers, max_atmosphering_speed, cargo_capacity, consumables
            FROM vehicles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Find a vehicle by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, name, model, vehicle_class, manufacturer, cost_in_credits, length,
                   crew, passengers, max_atmosphering_speed, cargo_capacity, consumables
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
