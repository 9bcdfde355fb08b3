//! Entry repository implementations.
//!
//! - [`PgEntryRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryEntryRepository`] - Process-local storage for tests and demos

pub mod memory_entry_repository;
pub mod pg_entry_repository;

pub use memory_entry_repository::InMemoryEntryRepository;
pub use pg_entry_repository::PgEntryRepository;
