//! Alias encoders used by the assignment services.
//!
//! - [`base62`] - Reversible identifier encoding with a shuffled alphabet
//! - [`hash_prefix`] - SHA-1 prefix candidates of a URL

pub mod base62;
pub mod hash_prefix;
