use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::common::{body_json, future_date, json_request, setup_test_app, valid_event_payload};

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_contains_seed_event() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/api/events").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["id"], 1);
    assert_eq!(json["data"][0]["name"], "Concierto Rock Nacional");
    assert_eq!(json["data"][0]["availableCapacity"], 450);
    assert_eq!(json["data"][0]["address"]["details"], "Teatro Gran Rex");
}

#[tokio::test]
async fn get_seed_event_by_id() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/api/events/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Concierto Rock Nacional");
    assert_eq!(json["data"]["locality"]["postalCode"], "1043");
}

#[tokio::test]
async fn get_missing_event_returns_404() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/api/events/999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Event not found");
}

#[tokio::test]
async fn non_numeric_path_id_returns_404_envelope() {
    let app = setup_test_app();

    // A non-numeric id can never match a record, so it behaves like any
    // other absent id: a 404 with the JSON failure envelope.
    let response = app
        .clone()
        .oneshot(Request::get("/api/events/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Event not found");

    let response = app
        .oneshot(
            Request::delete("/api/events/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn non_numeric_query_param_returns_400_envelope() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::get("/api/events?category=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_roundtrip() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &valid_event_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Event created successfully");
    // No id was supplied, so the next free one (seed is 1) gets assigned.
    assert_eq!(json["data"]["id"], 2);
    assert_eq!(json["data"]["availableCapacity"], 300);
    assert_eq!(json["data"]["totalCapacity"], 300);

    let response = app
        .oneshot(Request::get("/api/events/2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Festival de Jazz");
    assert_eq!(json["data"]["minAge"], 18);
    assert_eq!(json["data"]["date"], future_date());
}

#[tokio::test]
async fn create_with_caller_supplied_id() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload["id"] = serde_json::json!(42);

    let response = app
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 42);
}

#[tokio::test]
async fn create_with_duplicate_id_returns_409() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload["id"] = serde_json::json!(1);

    let response = app
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "an event with id 1 already exists");
}

#[tokio::test]
async fn create_without_min_age_defaults_to_zero() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload.as_object_mut().unwrap().remove("minAge");

    let response = app
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["minAge"], 0);
}

#[tokio::test]
async fn create_with_short_name_returns_400() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload["name"] = serde_json::json!("ab");

    let response = app
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "name must be between 3 and 100 characters");
}

#[tokio::test]
async fn create_with_past_date_returns_400() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload["date"] = serde_json::json!("2020-01-01");

    let response = app
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "date must be strictly in the future");
}

#[tokio::test]
async fn create_with_inverted_times_returns_400() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload["startTime"] = serde_json::json!("23:00");
    payload["endTime"] = serde_json::json!("08:00");

    let response = app
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "startTime must be earlier than endTime");
}

#[tokio::test]
async fn create_rejects_derived_capacity_field() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload["availableCapacity"] = serde_json::json!(10);

    let response = app
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn malformed_json_returns_400_envelope() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::post("/api/events")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_named_field() {
    let app = setup_test_app();

    let patch = serde_json::json!({ "name": "Concierto Reprogramado" });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/events/1", &patch))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Event updated successfully");
    assert_eq!(json["data"]["name"], "Concierto Reprogramado");
    // Everything else keeps its seeded value.
    assert_eq!(json["data"]["ticketPrice"], 2500.0);
    assert_eq!(json["data"]["date"], "2024-09-15");
    assert_eq!(json["data"]["availableCapacity"], 450);
    assert_eq!(json["data"]["address"]["street"], "Av. Corrientes");
}

#[tokio::test]
async fn update_missing_event_returns_404() {
    let app = setup_test_app();

    let patch = serde_json::json!({ "name": "No Existe Igual" });
    let response = app
        .oneshot(json_request("PUT", "/api/events/999", &patch))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_invalid_field_returns_400_without_side_effect() {
    let app = setup_test_app();

    let patch = serde_json::json!({ "description": "corta" });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/events/1", &patch))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The stored record is untouched.
    let response = app
        .oneshot(Request::get("/api/events/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["description"],
        "Gran concierto de rock con bandas locales"
    );
}

#[tokio::test]
async fn update_cannot_change_id() {
    let app = setup_test_app();

    let patch = serde_json::json!({ "id": 7 });
    let response = app
        .oneshot(json_request("PUT", "/api/events/1", &patch))
        .await
        .unwrap();

    // `id` is not an updatable field, so the payload is rejected outright.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_inverted_times_returns_400() {
    let app = setup_test_app();

    let patch = serde_json::json!({ "startTime": "22:00", "endTime": "10:00" });
    let response = app
        .oneshot(json_request("PUT", "/api/events/1", &patch))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::delete("/api/events/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Event deleted successfully");
    assert_eq!(json["data"]["id"], 1);

    let response = app
        .clone()
        .oneshot(Request::get("/api/events/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Second delete is also a clean not-found.
    let response = app
        .oneshot(
            Request::delete("/api/events/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_filters_by_category() {
    let app = setup_test_app();

    let mut payload = valid_event_payload();
    payload["categoryId"] = serde_json::json!(2);
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/events?category=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["categoryId"], 1);

    let response = app
        .oneshot(
            Request::get("/api/events?category=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["name"], "Festival de Jazz");
}

#[tokio::test]
async fn list_filters_by_date_from_inclusive() {
    let app = setup_test_app();

    // Add a future-dated event next to the 2024 seed record.
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/events", &valid_event_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The seed event sits exactly on the bound, so it is included.
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/events?dateFrom=2024-09-15")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 2);

    let response = app
        .oneshot(
            Request::get("/api/events?dateFrom=2024-09-16")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["name"], "Festival de Jazz");
}

#[tokio::test]
async fn list_with_combined_filters() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::get("/api/events?category=1&dateFrom=2024-09-15")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["id"], 1);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_categories_returns_seed() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::get("/api/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total"], 3);
    assert_eq!(json["data"][0]["name"], "Conciertos");
    assert_eq!(json["data"][2]["name"], "Teatro");
}
