use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cartelera API",
        version = "0.1.0",
        description = "CRUD over an in-memory catalog of ticketed events."
    ),
    paths(
        crate::routes::list_events,
        crate::routes::get_event,
        crate::routes::create_event,
        crate::routes::update_event,
        crate::routes::delete_event,
        crate::routes::list_categories,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CreateEventRequest,
        crate::dto::UpdateEventRequest,
        crate::dto::EventBody,
        crate::dto::AddressBody,
        crate::dto::LocalityBody,
        crate::dto::EventResponse,
        crate::dto::EventListResponse,
        crate::dto::CategoryBody,
        crate::dto::CategoryListResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorBody,
    )),
    tags(
        (name = "events", description = "Event catalog CRUD"),
        (name = "categories", description = "Static category list"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
