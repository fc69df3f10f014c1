//! REST API server — routes, DTOs, error mapping, and OpenAPI documentation.

pub mod dto;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod state;
