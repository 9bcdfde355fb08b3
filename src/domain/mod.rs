//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`validation`] - Field-level validation results
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Alias assignment lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod validation;
