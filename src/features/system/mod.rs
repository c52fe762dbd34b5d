//! Service-level endpoints: health, discovery and the not-found fallback.

pub mod dtos;
pub mod handlers;
pub mod routes;
