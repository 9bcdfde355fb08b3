//! Core domain entities.
//!
//! - [`Entry`] - A persisted URL address and its alias
//! - [`NewEntry`] - Creation payload, validated before it reaches the store

pub mod entry;

pub use entry::{Entry, MAX_URL_ADDRESS_LENGTH, NewEntry};
