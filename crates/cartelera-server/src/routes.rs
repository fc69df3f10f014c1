use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use chrono::Utc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cartelera_core::validation::{validate_event_patch, validate_new_event};
use cartelera_core::{EventFilter, EventPatch, NewEvent};

use crate::dto::{
    CategoryBody, CategoryListResponse, CreateEventRequest, EventBody, EventListResponse,
    EventResponse, HealthResponse, ListEventsQuery, UpdateEventRequest,
};
use crate::error::ApiError;
use crate::extract::{EventId, Params, Payload};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/categories", get(list_categories));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "List of events", body = EventListResponse),
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Params(query): Params<ListEventsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = EventFilter {
        category: query.category,
        date_from: query.date_from,
    };
    let events = state.repo.list_events(&filter);
    let total = events.len();

    tracing::info!(total, "listing events");

    Ok(axum::Json(EventListResponse {
        success: true,
        data: events.into_iter().map(EventBody::from).collect(),
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event details", body = EventResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorBody),
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.repo.get_event(id).ok_or(ApiError::NotFound)?;

    tracing::info!(id, name = %event.name, "fetched event");

    Ok(axum::Json(EventResponse {
        success: true,
        data: event.into(),
        message: None,
    }))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Invalid payload", body = crate::dto::ErrorBody),
        (status = 409, description = "Duplicate id", body = crate::dto::ErrorBody),
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_event = NewEvent::from(body);
    validate_new_event(&new_event)?;

    let event = state.repo.create_event(new_event)?;

    tracing::info!(id = event.id, name = %event.name, "event created");

    let response = EventResponse {
        success: true,
        data: event.into(),
        message: Some("Event created successfully".to_string()),
    };

    Ok((StatusCode::CREATED, axum::Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Merged event", body = EventResponse),
        (status = 400, description = "Invalid payload", body = crate::dto::ErrorBody),
        (status = 404, description = "Not found", body = crate::dto::ErrorBody),
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
    Payload(body): Payload<UpdateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let patch = EventPatch::from(body);
    validate_event_patch(&patch)?;

    let event = state
        .repo
        .update_event(id, patch)
        .ok_or(ApiError::NotFound)?;

    tracing::info!(id, name = %event.name, "event updated");

    Ok(axum::Json(EventResponse {
        success: true,
        data: event.into(),
        message: Some("Event updated successfully".to_string()),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Removed event", body = EventResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorBody),
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.repo.delete_event(id).ok_or(ApiError::NotFound)?;

    tracing::info!(id, name = %event.name, "event deleted");

    Ok(axum::Json(EventResponse {
        success: true,
        data: event.into(),
        message: Some("Event deleted successfully".to_string()),
    }))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = CategoryListResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.repo.list_categories();
    let total = categories.len();

    Ok(axum::Json(CategoryListResponse {
        success: true,
        data: categories.into_iter().map(CategoryBody::from).collect(),
        total,
    }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
