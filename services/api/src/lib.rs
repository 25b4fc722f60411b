//! Galaxy API: a REST backend for users, characters, planets, vehicles
//! and the favorites linking them.

pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod state;
pub mod validation;

pub use state::AppState;
