//! Single-character glyph validation.
//!
//! Head and skin patterns must be exactly one unicode scalar value. Patterns
//! may also be written as `\uXXXX` escapes (one to four hex digits, any case);
//! two consecutive escapes forming a UTF-16 surrogate pair decode to a single
//! character, e.g. `\uD83D\uDE00` is `😀`.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::error::{MillipedeError, Result};

fn unicode_escape() -> &'static Regex {
    static UNICODE_ESCAPE_RE: OnceLock<Regex> = OnceLock::new();
    UNICODE_ESCAPE_RE.get_or_init(|| {
        Regex::new(r"(?i)\\u([0-9a-f]{1,4})").expect("unicode escape pattern is valid")
    })
}

/// Resolve `input` to the single character it represents.
///
/// `part` names the pattern being validated ("head" or "skin") and is only
/// used for error reporting.
pub fn single_char(input: &str, part: &'static str) -> Result<char> {
    let invalid = || MillipedeError::InvalidCharacter {
        part,
        input: input.to_string(),
    };

    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c);
    }

    if !unicode_escape().is_match(input) {
        return Err(invalid());
    }

    let decoded = decode_escapes(input).ok_or_else(invalid)?;
    trace!(input, decoded = %decoded, "decoded unicode escapes");

    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid()),
    }
}

/// Replace every `\uXXXX` escape with its UTF-16 code unit and decode the
/// result. Returns `None` when the code units do not form valid UTF-16
/// (e.g. a lone or reversed surrogate).
fn decode_escapes(input: &str) -> Option<String> {
    let mut units: Vec<u16> = Vec::with_capacity(input.len());
    let mut last = 0;
    for caps in unicode_escape().captures_iter(input) {
        let (Some(whole), Some(hex)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        units.extend(input[last..whole.start()].encode_utf16());
        units.push(u16::from_str_radix(hex.as_str(), 16).ok()?);
        last = whole.end();
    }
    units.extend(input[last..].encode_utf16());

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .ok()
}

#[cfg(test)]
#[path = "../tests/rust/test_glyph.rs"]
mod tests;
