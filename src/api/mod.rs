//! HTTP API layer: routes, handlers, DTOs and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
