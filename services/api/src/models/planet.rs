//! Planet models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Planet entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub gravity: String,
    pub diameter: String,
    pub orbital_period: String,
    pub rotation_period: String,
    pub population: String,
    pub surface_water: String,
}

/// Body of `POST /planets`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub diameter: Option<String>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub population: Option<String>,
}

/// Validated planet insert
#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
}
