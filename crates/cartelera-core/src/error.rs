use thiserror::Error;

/// Domain-level errors for the Cartelera event catalog.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A payload field violated one of the event schema rules.
    /// The message names the offending field (first failing rule only).
    #[error("{0}")]
    Validation(String),

    /// A caller-supplied event id collides with an existing record.
    #[error("an event with id {0} already exists")]
    DuplicateId(i64),
}
