use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::models::{Address, Category, Event, EventFilter, EventPatch, Locality, NewEvent, User};

/// In-memory event catalog.
///
/// The event list lives behind a single `RwLock`, which is the only
/// synchronization the system needs: every operation is one short,
/// non-blocking step over the shared list. Categories and users are
/// immutable after construction. State is volatile and lost at process
/// exit.
pub struct EventRepository {
    events: RwLock<Vec<Event>>,
    categories: Vec<Category>,
    users: Vec<User>,
}

impl EventRepository {
    /// Build a repository populated with the seed data set.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(seed_events()),
            categories: seed_categories(),
            users: seed_users(),
        }
    }

    /// Build a repository with no events. Categories and users are still
    /// seeded. Intended for tests that need a deterministic empty list.
    pub fn empty() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            categories: seed_categories(),
            users: seed_users(),
        }
    }

    /// List events, optionally filtered by exact category id and an
    /// inclusive lower bound on the date. Insertion order is preserved.
    pub fn list_events(&self, filter: &EventFilter) -> Vec<Event> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        events
            .iter()
            .filter(|e| filter.category.is_none_or(|c| e.category_id == c))
            .filter(|e| filter.date_from.is_none_or(|from| e.date >= from))
            .cloned()
            .collect()
    }

    /// Linear scan by identifier equality.
    pub fn get_event(&self, id: i64) -> Option<Event> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        events.iter().find(|e| e.id == id).cloned()
    }

    /// Append a new event. A caller-supplied id that collides with an
    /// existing record is rejected; when no id is supplied the next free
    /// identifier (`max + 1`, starting at 1) is assigned. The stored
    /// record gets `available_capacity = total_capacity`.
    pub fn create_event(&self, new: NewEvent) -> Result<Event, CoreError> {
        let mut events = self.events.write().unwrap_or_else(PoisonError::into_inner);

        let id = match new.id {
            Some(id) => {
                if events.iter().any(|e| e.id == id) {
                    return Err(CoreError::DuplicateId(id));
                }
                id
            }
            None => events.iter().map(|e| e.id).max().unwrap_or(0) + 1,
        };

        let event = Event {
            id,
            name: new.name,
            description: new.description,
            ticket_price: new.ticket_price,
            total_capacity: new.total_capacity,
            date: new.date,
            start_time: new.start_time,
            end_time: new.end_time,
            min_age: new.min_age.unwrap_or(0),
            category_id: new.category_id,
            available_capacity: new.total_capacity,
            address: new.address,
            locality: new.locality,
        };

        tracing::debug!(id = event.id, name = %event.name, "event stored");
        events.push(event.clone());
        Ok(event)
    }

    /// Shallow-merge the patch over the stored record and return the
    /// merged result, or `None` when the id does not exist.
    pub fn update_event(&self, id: i64, patch: EventPatch) -> Option<Event> {
        let mut events = self.events.write().unwrap_or_else(PoisonError::into_inner);
        let event = events.iter_mut().find(|e| e.id == id)?;

        if let Some(name) = patch.name {
            event.name = name;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(price) = patch.ticket_price {
            event.ticket_price = price;
        }
        if let Some(capacity) = patch.total_capacity {
            event.total_capacity = capacity;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(start) = patch.start_time {
            event.start_time = start;
        }
        if let Some(end) = patch.end_time {
            event.end_time = end;
        }
        if let Some(age) = patch.min_age {
            event.min_age = age;
        }
        if let Some(category) = patch.category_id {
            event.category_id = category;
        }
        if let Some(address) = patch.address {
            event.address = address;
        }
        if let Some(locality) = patch.locality {
            event.locality = locality;
        }

        Some(event.clone())
    }

    /// Remove and return the first record matching the id. A second
    /// delete of the same id is a clean not-found.
    pub fn delete_event(&self, id: i64) -> Option<Event> {
        let mut events = self.events.write().unwrap_or_else(PoisonError::into_inner);
        let index = events.iter().position(|e| e.id == id)?;
        let removed = events.remove(index);
        tracing::debug!(id = removed.id, name = %removed.name, "event removed");
        Some(removed)
    }

    /// The static category seed list.
    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    /// Seeded users. Not exposed through any route.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Default for EventRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Conciertos".into(),
        },
        Category {
            id: 2,
            name: "Deportes".into(),
        },
        Category {
            id: 3,
            name: "Teatro".into(),
        },
    ]
}

fn seed_users() -> Vec<User> {
    vec![User {
        dni: "12345678".into(),
        name: "Juan".into(),
        surname: "Pérez".into(),
        email: "juan@email.com".into(),
        phone: "123456789".into(),
    }]
}

// Seed records are inserted as-is, without validation.
fn seed_events() -> Vec<Event> {
    vec![Event {
        id: 1,
        name: "Concierto Rock Nacional".into(),
        description: "Gran concierto de rock con bandas locales".into(),
        ticket_price: 2500.0,
        total_capacity: 500,
        date: NaiveDate::from_ymd_opt(2024, 9, 15).expect("valid seed date"),
        start_time: "20:00".into(),
        end_time: "23:30".into(),
        min_age: 16,
        category_id: 1,
        available_capacity: 450,
        address: Address {
            street: "Av. Corrientes".into(),
            number: 1234,
            details: Some("Teatro Gran Rex".into()),
        },
        locality: Locality {
            name: "CABA".into(),
            postal_code: "1043".into(),
        },
    }]
}
