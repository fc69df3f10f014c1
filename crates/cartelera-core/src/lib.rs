pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

pub use error::CoreError;
pub use models::{Address, Category, Event, EventFilter, EventPatch, Locality, NewEvent, User};
pub use repository::EventRepository;
