use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use cartelera_core::{Address, Category, Event, EventPatch, Locality, NewEvent};

// ---------------------------------------------------------------------------
// Shared nested objects
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddressBody {
    pub street: String,
    pub number: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocalityBody {
    pub name: String,
    pub postal_code: String,
}

impl From<AddressBody> for Address {
    fn from(body: AddressBody) -> Self {
        Self {
            street: body.street,
            number: body.number,
            details: body.details,
        }
    }
}

impl From<Address> for AddressBody {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            number: address.number,
            details: address.details,
        }
    }
}

impl From<LocalityBody> for Locality {
    fn from(body: LocalityBody) -> Self {
        Self {
            name: body.name,
            postal_code: body.postal_code,
        }
    }
}

impl From<Locality> for LocalityBody {
    fn from(locality: Locality) -> Self {
        Self {
            name: locality.name,
            postal_code: locality.postal_code,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Creation payload. Unknown fields are rejected, so derived fields such
/// as `availableCapacity` cannot be smuggled in.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEventRequest {
    /// Optional caller-supplied identifier; assigned by the server when absent.
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub ticket_price: f64,
    pub total_capacity: i64,
    /// ISO calendar date, strictly in the future.
    pub date: NaiveDate,
    /// `HH:MM`, 24-hour.
    pub start_time: String,
    pub end_time: String,
    /// Defaults to 0 when absent.
    pub min_age: Option<i64>,
    pub category_id: i64,
    pub address: AddressBody,
    pub locality: LocalityBody,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(body: CreateEventRequest) -> Self {
        Self {
            id: body.id,
            name: body.name,
            description: body.description,
            ticket_price: body.ticket_price,
            total_capacity: body.total_capacity,
            date: body.date,
            start_time: body.start_time,
            end_time: body.end_time,
            min_age: body.min_age,
            category_id: body.category_id,
            address: body.address.into(),
            locality: body.locality.into(),
        }
    }
}

/// Partial update payload: absent fields keep their stored values. The
/// identifier and `availableCapacity` cannot be changed through updates.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ticket_price: Option<f64>,
    pub total_capacity: Option<i64>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub min_age: Option<i64>,
    pub category_id: Option<i64>,
    pub address: Option<AddressBody>,
    pub locality: Option<LocalityBody>,
}

impl From<UpdateEventRequest> for EventPatch {
    fn from(body: UpdateEventRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            ticket_price: body.ticket_price,
            total_capacity: body.total_capacity,
            date: body.date,
            start_time: body.start_time,
            end_time: body.end_time,
            min_age: body.min_age,
            category_id: body.category_id,
            address: body.address.map(Into::into),
            locality: body.locality.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ticket_price: f64,
    pub total_capacity: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub min_age: i64,
    pub category_id: i64,
    pub available_capacity: i64,
    pub address: AddressBody,
    pub locality: LocalityBody,
}

impl From<Event> for EventBody {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            ticket_price: event.ticket_price,
            total_capacity: event.total_capacity,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            min_age: event.min_age,
            category_id: event.category_id,
            available_capacity: event.available_capacity,
            address: event.address.into(),
            locality: event.locality.into(),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    /// Exact category id match.
    pub category: Option<i64>,
    /// Inclusive lower bound on the event date (ISO date).
    pub date_from: Option<NaiveDate>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventListResponse {
    pub success: bool,
    pub data: Vec<EventBody>,
    pub total: usize,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventResponse {
    pub success: bool,
    pub data: EventBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoryBody {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryBody {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub data: Vec<CategoryBody>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure envelope: `success` is always false and `error` carries a
/// human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}
