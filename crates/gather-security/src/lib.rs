//! # Gather Security
//! 
//! Session token issuing and validation.

pub mod jwt;

pub use jwt::{Claims, JwtError, SessionTokenService};
