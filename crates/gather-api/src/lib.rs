//! # Gather API
//! 
//! HTTP handlers, extractors, DTOs, and routing for the groups resource.

pub mod handlers;
pub mod extract;
pub mod dto;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
