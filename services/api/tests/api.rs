//! End-to-end tests driving the router against an in-memory database

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use common::database::{DatabaseConfig, init_pool};
use galaxy_api::{
    AppState,
    routes::{App, create_app},
    schema::init_schema,
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> App {
    let pool = init_pool(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    init_schema(&pool).await.expect("Failed to create schema");
    create_app(AppState::new(pool))
}

async fn send(app: &App, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn user_payload() -> Value {
    json!({
        "username": "lskywalker",
        "firstname": "Luke",
        "lastname": "Skywalker",
        "birthdate": "1977-05-25",
        "email": "luke@rebellion.org",
        "password": "Tatooine-19"
    })
}

fn character_payload() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": 172,
        "mass": 77,
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male"
    })
}

fn planet_payload() -> Value {
    json!({
        "name": "Tatooine",
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": "200000"
    })
}

fn vehicle_payload() -> Value {
    json!({
        "name": "Sand Crawler",
        "model": "Digger Crawler",
        "vehicle_class": "wheeled",
        "manufacturer": "Corellia Mining Corporation",
        "cost_in_credits": "150000",
        "length": "36.8",
        "max_atmosphering_speed": "30",
        "crew": "46",
        "passengers": "30",
        "cargo_capacity": "50000",
        "consumables": "2 months"
    })
}

fn without(mut payload: Value, field: &str) -> Value {
    payload.as_object_mut().unwrap().remove(field);
    payload
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_user_requires_every_field() {
    let app = test_app().await;

    for field in ["username", "firstname", "lastname", "birthdate", "email", "password"] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/users",
            Some(without(user_payload(), field)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(body["error"], format!("{field} is required"));
    }

    let (_, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_create_user_rejects_missing_or_malformed_body() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/users", Some(json!(["luke"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_and_read_user() {
    let app = test_app().await;

    let (status, created) = send(&app, Method::POST, "/users", Some(user_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "lskywalker");
    assert_eq!(created["birthdate"], "1977-05-25");
    assert_eq!(created["is_active"], true);
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"], json!([created]));
}

#[tokio::test]
async fn test_duplicate_username_or_email_conflicts() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::POST, "/users", Some(user_payload())).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut same_username = user_payload();
    same_username["email"] = json!("other@rebellion.org");
    let (status, _) = send(&app, Method::POST, "/users", Some(same_username)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let mut same_email = user_payload();
    same_email["username"] = json!("another");
    let (status, _) = send(&app, Method::POST, "/users", Some(same_email)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_user() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::DELETE, "/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, created) = send(&app, Method::POST, "/users", Some(user_payload())).await;
    let uri = format!("/users/{}", created["id"]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_characters_crud() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/people",
        Some(without(character_payload(), "eye_color")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "eye_color is required");

    let (status, created) = send(&app, Method::POST, "/people", Some(character_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Luke Skywalker");
    assert_eq!(created["height"], 172);
    assert_eq!(created["birth_year"], "19BBY");

    let uri = format!("/people/{}", created["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&app, Method::GET, "/characters", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (status, _) = send(&app, Method::GET, "/people/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_character_rejects_non_numeric_height() {
    let app = test_app().await;

    let mut payload = character_payload();
    payload["height"] = json!("tall");
    let (status, _) = send(&app, Method::POST, "/characters", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_planets_crud() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/planets",
        Some(without(planet_payload(), "population")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "population is required");

    let (status, created) = send(&app, Method::POST, "/planets", Some(planet_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["climate"], "arid");

    let (status, fetched) =
        send(&app, Method::GET, &format!("/planets/{}", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, listed) = send(&app, Method::GET, "/planets", None).await;
    assert_eq!(listed, json!([created]));

    let (status, _) = send(&app, Method::GET, "/planets/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vehicles_crud() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/vehicles",
        Some(without(vehicle_payload(), "vehicle_class")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "vehicle_class is required");

    let (status, created) = send(&app, Method::POST, "/vehicles", Some(vehicle_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["manufacturer"], "Corellia Mining Corporation");

    let (status, fetched) =
        send(&app, Method::GET, &format!("/vehicles/{}", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, listed) = send(&app, Method::GET, "/vehicles", None).await;
    assert_eq!(listed, json!([created]));

    let (status, _) = send(&app, Method::GET, "/vehicles/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_favorite_add_then_remove_leaves_list_empty() {
    let app = test_app().await;

    send(&app, Method::POST, "/users", Some(user_payload())).await;
    let (_, character) = send(&app, Method::POST, "/people", Some(character_payload())).await;
    let (_, planet) = send(&app, Method::POST, "/planets", Some(planet_payload())).await;
    let (_, vehicle) = send(&app, Method::POST, "/vehicles", Some(vehicle_payload())).await;

    let (status, favorite) = send(
        &app,
        Method::POST,
        &format!("/favorite/people/{}", character["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(favorite["user_id"], 1);
    assert_eq!(favorite["character_id"], character["id"]);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/favorite/planet/{}", planet["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/favorite/vehicle/{}", vehicle["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, favorites) = send(&app, Method::GET, "/users/1/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favorites["people"], json!([character]));
    assert_eq!(favorites["planets"], json!([planet]));
    assert_eq!(favorites["vehicles"], json!([vehicle]));

    let (_, user) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(user["favorite_characters"], json!([character]));

    for uri in [
        format!("/favorite/people/{}", character["id"]),
        format!("/favorite/planet/{}", planet["id"]),
        format!("/favorite/vehicle/{}", vehicle["id"]),
    ] {
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK, "DELETE {uri}");
    }

    let (_, favorites) = send(&app, Method::GET, "/users/1/favorites", None).await;
    assert_eq!(
        favorites,
        json!({"people": [], "planets": [], "vehicles": []})
    );
}

#[tokio::test]
async fn test_favorite_errors() {
    let app = test_app().await;

    let (_, character) = send(&app, Method::POST, "/people", Some(character_payload())).await;
    let uri = format!("/favorite/people/{}", character["id"]);

    // The implicit user does not exist yet.
    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    send(&app, Method::POST, "/users", Some(user_payload())).await;

    let (status, body) = send(&app, Method::POST, "/favorite/planet/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");

    let (status, _) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Favorite not found");

    let (status, _) = send(&app, Method::GET, "/users/5/favorites", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_with_favorites_cannot_be_deleted() {
    let app = test_app().await;

    send(&app, Method::POST, "/users", Some(user_payload())).await;
    let (_, planet) = send(&app, Method::POST, "/planets", Some(planet_payload())).await;
    send(
        &app,
        Method::POST,
        &format!("/favorite/planet/{}", planet["id"]),
        None,
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_trailing_slash_reaches_the_same_handler() {
    let app = test_app().await;

    let (status, created) = send(&app, Method::POST, "/planets/", Some(planet_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Tatooine");

    let (status, _) = send(&app, Method::POST, "/vehicles", Some(vehicle_payload())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = send(&app, Method::GET, "/vehicles/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let (status, fetched) =
        send(&app, Method::GET, &format!("/planets/{}/", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_non_numeric_id_is_a_json_bad_request() {
    let app = test_app().await;

    for (method, uri) in [
        (Method::GET, "/people/abc"),
        (Method::GET, "/users/abc/favorites"),
        (Method::DELETE, "/users/abc"),
        (Method::POST, "/favorite/vehicle/abc"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string(), "{uri} returned {body}");
    }
}
