//! Favorite join rows linking a user to a character, planet or vehicle

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Which join table a favorite lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    /// Join table name
    pub fn table(self) -> &'static str {
        match self {
            FavoriteKind::Character => "favorite_characters",
            FavoriteKind::Planet => "favorite_planets",
            FavoriteKind::Vehicle => "favorite_vehicles",
        }
    }

    /// Foreign key column pointing at the target entity
    pub fn target_column(self) -> &'static str {
        match self {
            FavoriteKind::Character => "character_id",
            FavoriteKind::Planet => "planet_id",
            FavoriteKind::Vehicle => "vehicle_id",
        }
    }

    /// Human readable name of the target entity
    pub fn label(self) -> &'static str {
        match self {
            FavoriteKind::Character => "Character",
            FavoriteKind::Planet => "Planet",
            FavoriteKind::Vehicle => "Vehicle",
        }
    }
}

/// A row of one of the favorite join tables
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub target_id: i64,
    pub kind: FavoriteKind,
}

// The target id is keyed by its column name, e.g. `planet_id`.
impl Serialize for Favorite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("user_id", &self.user_id)?;
        map.serialize_entry(self.kind.target_column(), &self.target_id)?;
        map.end()
    }
}
