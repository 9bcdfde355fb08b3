//! Alias assignment services.
//!
//! Both strategies implement [`AliasService`] and are interchangeable behind
//! `Arc<dyn AliasService>`; [`build_alias_service`] picks one from configuration.

pub mod alias_service;
pub mod base62_alias_service;
pub mod hash_alias_service;

pub use alias_service::{AliasService, AliasStrategy, build_alias_service};
pub use base62_alias_service::Base62AliasService;
pub use hash_alias_service::HashAliasService;
