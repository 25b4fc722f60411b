//! Input validation utilities
//!
//! Creation payloads arrive with every field optional. Each `validate_*`
//! function checks the fields in a fixed order and reports the first one
//! that is missing, then hands back the insert the repositories expect.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::models::{
    CreateCharacterRequest, CreatePlanetRequest, CreateUserRequest, CreateVehicleRequest,
    NewCharacter, NewPlanet, NewUser, NewVehicle,
};

/// Unwrap a required field or explain which one is missing
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("{} is required", field))
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("email is required".to_string());
    }

    if email.len() > 120 {
        return Err("email must be at most 120 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` birthdate
pub fn parse_birthdate(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "birthdate must be a date formatted as YYYY-MM-DD".to_string())
}

pub fn validate_new_user(payload: CreateUserRequest) -> Result<NewUser, String> {
    let username = require(payload.username, "username")?;
    let firstname = require(payload.firstname, "firstname")?;
    let lastname = require(payload.lastname, "lastname")?;
    let birthdate = require(payload.birthdate, "birthdate")?;
    let email = require(payload.email, "email")?;
    let password = require(payload.password, "password")?;

    if username.len() > 120 {
        return Err("username must be at most 120 characters long".to_string());
    }
    let birthdate = parse_birthdate(&birthdate)?;
    validate_email(&email)?;

    Ok(NewUser {
        username,
        firstname,
        lastname,
        birthdate,
        email,
        password,
    })
}

pub fn validate_new_character(payload: CreateCharacterRequest) -> Result<NewCharacter, String> {
    Ok(NewCharacter {
        name: require(payload.name, "name")?,
        height: require(payload.height, "height")?,
        mass: require(payload.mass, "mass")?,
        hair_color: require(payload.hair_color, "hair_color")?,
        skin_color: require(payload.skin_color, "skin_color")?,
        eye_color: require(payload.eye_color, "eye_color")?,
        birth_year: require(payload.birth_year, "birth_year")?,
        gender: require(payload.gender, "gender")?,
    })
}

pub fn validate_new_planet(payload: CreatePlanetRequest) -> Result<NewPlanet, String> {
    Ok(NewPlanet {
        name: require(payload.name, "name")?,
        rotation_period: require(payload.rotation_period, "rotation_period")?,
        orbital_period: require(payload.orbital_period, "orbital_period")?,
        diameter: require(payload.diameter, "diameter")?,
        climate: require(payload.climate, "climate")?,
        gravity: require(payload.gravity, "gravity")?,
        terrain: require(payload.terrain, "terrain")?,
        surface_water: require(payload.surface_water, "surface_water")?,
        population: require(payload.population, "population")?,
    })
}

pub fn validate_new_vehicle(payload: CreateVehicleRequest) -> Result<NewVehicle, String> {
    Ok(NewVehicle {
        name: require(payload.name, "name")?,
        model: require(payload.model, "model")?,
        vehicle_class: require(payload.vehicle_class, "vehicle_class")?,
        manufacturer: require(payload.manufacturer, "manufacturer")?,
        cost_in_credits: require(payload.cost_in_credits, "cost_in_credits")?,
        length: require(payload.length, "length")?,
        max_atmosphering_speed: require(payload.max_atmosphering_speed, "max_atmosphering_speed")?,
        crew: require(payload.crew, "crew")?,
        passengers: require(payload.passengers, "passengers")?,
        cargo_capacity: require(payload.cargo_capacity, "cargo_capacity")?,
        consumables: require(payload.consumables, "consumables")?,
    })
}
