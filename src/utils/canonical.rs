//! Canonical string form of a payload, the exact input to the HMAC.
//!
//! Pairs are ordered by key (byte-wise), both sides are percent-encoded with
//! everything outside the RFC 3986 unreserved set escaped, and pairs are
//! joined as `key=value&key2=value2`. Null values encode as the empty string.
//! The gateway recomputes this string, so the format must not change.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::models::Payload;

/// Everything except `A-Z a-z 0-9 - . _ ~`
const RFC3986_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a single component (space becomes `%20`, never `+`)
pub fn rfc3986_encode(input: &str) -> String {
    utf8_percent_encode(input, RFC3986_RESERVED).to_string()
}

/// Build the canonical string for a payload
pub fn canonicalize(payload: &Payload) -> String {
    payload
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                rfc3986_encode(key),
                rfc3986_encode(value.as_str().unwrap_or(""))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
