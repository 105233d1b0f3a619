//! # Gather Core
//! 
//! Domain entities, validation, services, and repository traits for the
//! groups service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod validation;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use validation::FieldErrors;
