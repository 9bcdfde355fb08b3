//! Hash-prefix alias candidates.
//!
//! A candidate is the leading hex characters of the SHA-1 digest of the URL,
//! the same way short git commit ids are taken from full hashes. Widths are
//! bounded by [`MIN_ALIAS_WIDTH`] and [`MAX_ALIAS_WIDTH`].

use sha1::{Digest, Sha1};

/// Width of the first candidate tried for a URL.
pub const MIN_ALIAS_WIDTH: usize = 6;

/// Widest candidate tried before the alias space is considered exhausted.
pub const MAX_ALIAS_WIDTH: usize = 10;

/// Returns the full lowercase hex SHA-1 digest of `url_address`.
pub fn digest_hex(url_address: &str) -> String {
    hex::encode(Sha1::digest(url_address.as_bytes()))
}

/// Returns the first `width` hex characters of the URL's SHA-1 digest.
///
/// `width` is clamped to `MIN_ALIAS_WIDTH..=MAX_ALIAS_WIDTH`. Candidates for the
/// same URL at increasing widths are prefixes of one another.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(candidate("http://url.test.com", 6), "928e4e");
/// assert_eq!(candidate("http://url.test.com", 7), "928e4eb");
/// ```
pub fn candidate(url_address: &str, width: usize) -> String {
    let width = width.clamp(MIN_ALIAS_WIDTH, MAX_ALIAS_WIDTH);
    let mut hex = digest_hex(url_address);
    hex.truncate(width);
    hex
}
