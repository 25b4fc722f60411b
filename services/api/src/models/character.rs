//! Character models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Character entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub skin_color: String,
    pub height: i64,
    pub mass: i64,
}

/// Body of `POST /people`; every field is checked for presence before insert
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: Option<String>,
    pub height: Option<i64>,
    pub mass: Option<i64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

/// Validated character insert
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub height: i64,
    pub mass: i64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
}
