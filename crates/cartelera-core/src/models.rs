use chrono::NaiveDate;

/// A schedulable ticketed occurrence with capacity, timing, and location data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ticket_price: f64,
    pub total_capacity: i64,
    pub date: NaiveDate,
    /// `HH:MM`, 24-hour.
    pub start_time: String,
    pub end_time: String,
    pub min_age: i64,
    pub category_id: i64,
    /// Set to `total_capacity` at creation; never decremented afterwards.
    pub available_capacity: i64,
    pub address: Address,
    pub locality: Locality,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locality {
    pub name: String,
    pub postal_code: String,
}

/// Static read-only event category.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Seeded but not exposed through any route.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub dni: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

/// Payload for creating an event.
///
/// `id` is caller-supplied; when `None` the repository assigns the next
/// free identifier. `min_age` defaults to 0 when absent.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub ticket_price: f64,
    pub total_capacity: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub min_age: Option<i64>,
    pub category_id: i64,
    pub address: Address,
    pub locality: Locality,
}

/// Partial payload for a shallow-merge update: only fields that are
/// present overwrite the stored record. Nested `address` and `locality`
/// are replaced wholesale when present.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ticket_price: Option<f64>,
    pub total_capacity: Option<i64>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub min_age: Option<i64>,
    pub category_id: Option<i64>,
    pub address: Option<Address>,
    pub locality: Option<Locality>,
}

/// Query filters for listing events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Exact category id match.
    pub category: Option<i64>,
    /// Inclusive lower bound on the event date.
    pub date_from: Option<NaiveDate>,
}
