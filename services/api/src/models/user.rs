//! User model and the favorites aggregate served with it

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Character, Planet, Vehicle};

/// User entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub birthdate: NaiveDate,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub birthdate: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated user insert; `password` is still plain text here
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub birthdate: NaiveDate,
    pub email: String,
    pub password: String,
}

/// Everything a user has marked as favorite
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFavorites {
    pub people: Vec<Character>,
    pub planets: Vec<Planet>,
    pub vehicles: Vec<Vehicle>,
}

/// Serialized user, favorites included
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub birthdate: NaiveDate,
    pub email: String,
    pub is_active: bool,
    pub favorite_characters: Vec<Character>,
    pub favorite_planets: Vec<Planet>,
    pub favorite_vehicles: Vec<Vehicle>,
}

impl UserResponse {
    pub fn new(user: User, favorites: UserFavorites) -> Self {
        Self {
            id: user.id,
            username: user.username,
            firstname: user.firstname,
            lastname: user.lastname,
            birthdate: user.birthdate,
            email: user.email,
            is_active: user.is_active,
            favorite_characters: favorites.people,
            favorite_planets: favorites.planets,
            favorite_vehicles: favorites.vehicles,
        }
    }
}
