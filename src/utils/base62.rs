//! Base62 conversion of entry identifiers.
//!
//! Uses a fixed, shuffled alphabet so consecutive identifiers do not produce
//! visibly consecutive aliases. The alphabet is part of the alias format: changing
//! it invalidates every alias issued so far.

/// The 62 alias characters, indexed 0 through 61.
pub const ALPHABET: &[u8; 62] = b"DWfc8UMOK0asT1ZvEFCwRmej23BJAzq7QHoXVlnPLNby4kY9pgr5td6IuGhxSi";

const BASE: u64 = 62;

/// Encodes an identifier as a base62 string.
///
/// Repeatedly divides by 62, using each remainder as an index into
/// [`ALPHABET`]. Values below 62 map to a single character; `0` maps to the
/// first alphabet character.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode(0), "D");
/// assert_eq!(encode(62), "WD");
/// ```
pub fn encode(mut value: u64) -> String {
    // 62^11 > 2^64
    let mut buf = [0u8; 11];
    let mut i = buf.len();

    loop {
        i -= 1;
        buf[i] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
        if value == 0 {
            break;
        }
    }

    buf[i..].iter().map(|&b| b as char).collect()
}

/// Decodes a string produced by [`encode`] back into its identifier.
///
/// Returns `None` for empty input, characters outside [`ALPHABET`], or values
/// that do not fit in a `u64`.
pub fn decode(alias: &str) -> Option<u64> {
    if alias.is_empty() {
        return None;
    }

    alias.bytes().try_fold(0u64, |acc, byte| {
        let digit = index_of(byte)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

fn index_of(byte: u8) -> Option<u64> {
    ALPHABET
        .iter()
        .position(|&c| c == byte)
        .map(|pos| pos as u64)
}
