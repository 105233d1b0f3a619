//! # Gather Infrastructure
//! 
//! Repository implementations (adapters): PostgreSQL and in-memory.

pub mod database;
pub mod memory;
pub mod repositories;

pub use database::{create_pool, run_migrations, PgGroupRepository, PgGroupMemberRepository, PgMeetingRepository};
pub use memory::MemoryStore;
pub use repositories::Repositories;
