//! Entry entity associating a URL address with its alias.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::validation::{
    FieldViolation, no_whitespace_or_control, not_blank, violations_from,
};

/// Maximum accepted length of a URL address.
pub const MAX_URL_ADDRESS_LENGTH: u64 = 2000;

/// Compiled regex for stored hash-prefix aliases.
static URL_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{6,10}$").expect("alias pattern is valid"));

/// A persisted association between a URL address and its alias.
///
/// `url_alias` is only populated by the hash-prefix strategy. The base62
/// strategy derives the alias from `id` on demand and never stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub url_address: String,
    pub url_alias: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_views: i64,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(
        id: i64,
        url_address: String,
        url_alias: Option<String>,
        created_at: DateTime<Utc>,
        total_views: i64,
    ) -> Self {
        Self {
            id,
            url_address,
            url_alias,
            created_at,
            total_views,
        }
    }

    /// Returns true if this entry was created for `url_address`.
    pub fn is_for(&self, url_address: &str) -> bool {
        self.url_address == url_address
    }
}

/// Input data for creating a new entry.
///
/// The store assigns `id` and starts `total_views` at zero.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewEntry {
    #[validate(
        custom(function = "not_blank"),
        custom(function = "no_whitespace_or_control"),
        length(
            max = MAX_URL_ADDRESS_LENGTH,
            message = "must have up to 2000 characters"
        ),
        url(message = "must be a valid URL")
    )]
    pub url_address: String,

    #[validate(regex(
        path = "*URL_ALIAS_REGEX",
        message = "must be 6 to 10 lowercase letters or digits"
    ))]
    pub url_alias: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl NewEntry {
    /// Entry for the base62 strategy: no stored alias.
    pub fn new(url_address: impl Into<String>) -> Self {
        Self {
            url_address: url_address.into(),
            url_alias: None,
            created_at: Utc::now(),
        }
    }

    /// Entry for the hash-prefix strategy.
    pub fn with_alias(url_address: impl Into<String>, url_alias: impl Into<String>) -> Self {
        Self {
            url_address: url_address.into(),
            url_alias: Some(url_alias.into()),
            created_at: Utc::now(),
        }
    }

    /// Returns every rule this entry violates. Empty when the entry is valid.
    pub fn violations(&self) -> Vec<FieldViolation> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => violations_from(&errors),
        }
    }
}
