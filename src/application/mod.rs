//! Application layer services implementing business logic.
//!
//! Services orchestrate lookups, alias generation, collision handling and
//! persistence through the repository traits, and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::HashAliasService`] - SHA-1 prefix aliases with adaptive widening
//! - [`services::Base62AliasService`] - Base62-encoded identifier aliases

pub mod services;
