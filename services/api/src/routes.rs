//! API service routes

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    models::{
        Character, CreateCharacterRequest, CreatePlanetRequest, CreateUserRequest,
        CreateVehicleRequest, Favorite, FavoriteKind, Planet, UserResponse, Vehicle,
    },
    password::hash_password,
    validation::{
        validate_new_character, validate_new_planet, validate_new_user, validate_new_vehicle,
    },
};

/// Every favorite endpoint acts on behalf of this user; there is no authentication.
pub const FAVORITES_USER_ID: i64 = 1;

/// The served application: the router behind trailing-slash normalization
pub type App = NormalizePath<Router>;

/// Wrap the router so `/planets/` and `/planets` reach the same handler.
/// Normalization has to run before routing, hence outside the router.
pub fn create_app(state: AppState) -> App {
    NormalizePath::trim_trailing_slash(create_router(state))
}

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/users", get(get_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
        .route("/users/:id/favorites", get(get_user_favorites))
        .route("/people", get(get_people).post(create_character))
        .route("/people/:id", get(get_person))
        .route("/characters", get(get_people).post(create_character))
        .route("/characters/:id", get(get_person))
        .route("/planets", get(get_planets).post(create_planet))
        .route("/planets/:id", get(get_planet))
        .route("/vehicles", get(get_vehicles).post(create_vehicle))
        .route("/vehicles/:id", get(get_vehicle))
        .route(
            "/favorite/people/:id",
            post(add_favorite_person).delete(remove_favorite_person),
        )
        .route(
            "/favorite/planet/:id",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/vehicle/:id",
            post(add_favorite_vehicle).delete(remove_favorite_vehicle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    common::database::health_check(&state.db_pool).await?;

    Ok(Json(json!({
        "status": "ok",
        "service": "galaxy-api"
    })))
}

// Users

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let new_user = validate_new_user(payload).map_err(ApiError::BadRequest)?;

    let password_hash = hash_password(&new_user.password).map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        ApiError::InternalServerError
    })?;

    let user = state
        .user_repository
        .create(&new_user, &password_hash)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                ApiError::Conflict("Username or email already registered".to_string())
            } else {
                e.into()
            }
        })?;

    let response = UserResponse::new(user, Default::default());
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all users, favorites included
pub async fn get_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.user_repository.get_all().await?;

    let mut data = Vec::with_capacity(users.len());
    for user in users {
        let favorites = state.favorite_repository.for_user(user.id).await?;
        data.push(UserResponse::new(user, favorites));
    }

    Ok(Json(json!({ "data": data })))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(id) = id?;
    let user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let favorites = state.favorite_repository.for_user(user.id).await?;
    Ok(Json(UserResponse::new(user, favorites)))
}

/// Get the favorite people, planets and vehicles of a user
pub async fn get_user_favorites(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    if state.user_repository.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let favorites = state.favorite_repository.for_user(id).await?;
    Ok(Json(favorites))
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    let deleted = state.user_repository.delete(id).await.map_err(|e| {
        if e.is_foreign_key_violation() {
            ApiError::Conflict("User still has favorites".to_string())
        } else {
            e.into()
        }
    })?;

    if deleted {
        Ok(Json(json!({"message": "User deleted successfully"})))
    } else {
        Err(ApiError::NotFound("User not found".to_string()))
    }
}

// Characters

/// Create a new character
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let character = validate_new_character(payload).map_err(ApiError::BadRequest)?;

    let created = state.character_repository.create(&character).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get all characters
pub async fn get_people(State(state): State<AppState>) -> ApiResult<Json<Vec<Character>>> {
    Ok(Json(state.character_repository.get_all().await?))
}

/// Get a character by ID
pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Character>> {
    let Path(id) = id?;
    state
        .character_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Character not found".to_string()))
}

// Planets

/// Create a new planet
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let planet = validate_new_planet(payload).map_err(ApiError::BadRequest)?;

    let created = state.planet_repository.create(&planet).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get all planets
pub async fn get_planets(State(state): State<AppState>) -> ApiResult<Json<Vec<Planet>>> {
    Ok(Json(state.planet_repository.get_all().await?))
}

/// Get a planet by ID
pub async fn get_planet(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Planet>> {
    let Path(id) = id?;
    state
        .planet_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Planet not found".to_string()))
}

// Vehicles

/// Create a new vehicle
pub async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let vehicle = validate_new_vehicle(payload).map_err(ApiError::BadRequest)?;

    let created = state.vehicle_repository.create(&vehicle).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get all vehicles
pub async fn get_vehicles(State(state): State<AppState>) -> ApiResult<Json<Vec<Vehicle>>> {
    Ok(Json(state.vehicle_repository.get_all().await?))
}

/// Get a vehicle by ID
pub async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vehicle>> {
    let Path(id) = id?;
    state
        .vehicle_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Vehicle not found".to_string()))
}

// Favorites

async fn target_exists(state: &AppState, kind: FavoriteKind, id: i64) -> ApiResult<bool> {
    let exists = match kind {
        FavoriteKind::Character => state.character_repository.find_by_id(id).await?.is_some(),
        FavoriteKind::Planet => state.planet_repository.find_by_id(id).await?.is_some(),
        FavoriteKind::Vehicle => state.vehicle_repository.find_by_id(id).await?.is_some(),
    };
    Ok(exists)
}

async fn add_favorite(
    state: &AppState,
    kind: FavoriteKind,
    target_id: i64,
) -> ApiResult<(StatusCode, Json<Favorite>)> {
    if !target_exists(state, kind, target_id).await? {
        return Err(ApiError::NotFound(format!("{} not found", kind.label())));
    }

    if state
        .user_repository
        .find_by_id(FAVORITES_USER_ID)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let favorite = state
        .favorite_repository
        .add(kind, FAVORITES_USER_ID, target_id)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                ApiError::Conflict(format!("{} is already a favorite", kind.label()))
            } else {
                e.into()
            }
        })?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

async fn remove_favorite(
    state: &AppState,
    kind: FavoriteKind,
    target_id: i64,
) -> ApiResult<Json<serde_json::Value>> {
    let removed = state
        .favorite_repository
        .remove(kind, FAVORITES_USER_ID, target_id)
        .await?;

    if removed {
        Ok(Json(json!({
            "message": format!("{} removed from favorites", kind.label())
        })))
    } else {
        Err(ApiError::NotFound("Favorite not found".to_string()))
    }
}

/// Add a character to the favorites of the implicit user
pub async fn add_favorite_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    add_favorite(&state, FavoriteKind::Character, id).await
}

/// Remove a character from the favorites of the implicit user
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    remove_favorite(&state, FavoriteKind::Character, id).await
}

/// Add a planet to the favorites of the implicit user
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    add_favorite(&state, FavoriteKind::Planet, id).await
}

/// Remove a planet from the favorites of the implicit user
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    remove_favorite(&state, FavoriteKind::Planet, id).await
}

/// Add a vehicle to the favorites of the implicit user
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    add_favorite(&state, FavoriteKind::Vehicle, id).await
}

/// Remove a vehicle from the favorites of the implicit user
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    remove_favorite(&state, FavoriteKind::Vehicle, id).await
}
