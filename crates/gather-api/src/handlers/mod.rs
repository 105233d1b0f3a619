//! HTTP handlers

pub mod groups;
pub mod health;
