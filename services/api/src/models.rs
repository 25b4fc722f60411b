//! API models for request and response payloads

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::{Character, CreateCharacterRequest, NewCharacter};
pub use favorite::{Favorite, FavoriteKind};
pub use planet::{CreatePlanetRequest, NewPlanet, Planet};
pub use user::{CreateUserRequest, NewUser, User, UserFavorites, UserResponse};
pub use vehicle::{CreateVehicleRequest, NewVehicle, Vehicle};
