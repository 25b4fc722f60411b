//! Table definitions, created on startup when missing

use common::error::{DatabaseError, DatabaseResult};
use sqlx::SqlitePool;
use tracing::info;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username VARCHAR(120) NOT NULL UNIQUE,
        firstname VARCHAR(30) NOT NULL,
        lastname VARCHAR(30) NOT NULL,
        birthdate DATE NOT NULL,
        email VARCHAR(120) NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        is_active BOOLEAN NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(100) NOT NULL,
        birth_year VARCHAR(20) NOT NULL,
        eye_color VARCHAR(20) NOT NULL,
        gender VARCHAR(20) NOT NULL,
        hair_color VARCHAR(20) NOT NULL,
        skin_color VARCHAR(20) NOT NULL,
        height INTEGER NOT NULL,
        mass INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(100) NOT NULL,
        climate VARCHAR(50) NOT NULL,
        terrain VARCHAR(50) NOT NULL,
        gravity VARCHAR(20) NOT NULL,
        diameter VARCHAR(20) NOT NULL,
        orbital_period VARCHAR(20) NOT NULL,
        rotation_period VARCHAR(20) NOT NULL,
        population VARCHAR(30) NOT NULL,
        surface_water VARCHAR(20) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(100) NOT NULL,
        model VARCHAR(100) NOT NULL,
        vehicle_class VARCHAR(50) NOT NULL,
        manufacturer VARCHAR(100) NOT NULL,
        cost_in_credits VARCHAR(20) NOT NULL,
        length VARCHAR(20) NOT NULL,
        crew VARCHAR(20) NOT NULL,
        passengers VARCHAR(20) NOT NULL,
        max_atmosphering_speed VARCHAR(20) NOT NULL,
        cargo_capacity VARCHAR(20) NOT NULL,
        consumables VARCHAR(50) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favorite_characters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        character_id INTEGER NOT NULL REFERENCES characters(id),
        UNIQUE (user_id, character_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favorite_planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        planet_id INTEGER NOT NULL REFERENCES planets(id),
        UNIQUE (user_id, planet_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favorite_vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id),
        UNIQUE (user_id, vehicle_id)
    )
    "#,
];

/// Create every table that does not exist yet, in a single transaction
pub async fn init_schema(pool: &SqlitePool) -> DatabaseResult<()> {
    let mut tx = pool.begin().await.map_err(DatabaseError::Connection)?;

    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;
    }

    tx.commit()
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    info!("Database schema ready ({} tables)", STATEMENTS.len());
    Ok(())
}
