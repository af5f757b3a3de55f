//! Extraction of a place name from a URL text fragment.
//!
//! Maps emit two fragment shapes: a range highlight (`#:~:text=-,Name,-suffix`)
//! and a plain text quote (`#:~:text=Name&...`). Both are handled here.

use std::borrow::Cow;
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::error::{Clip2KmlError, Result};

pub const TEXT_FRAGMENT_MARKER: &str = "#:~:text=";

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-,([^,]+?),-").expect("valid regex"));

/// Pull the decoded place name out of clipboard text.
pub fn extract_toponym(clipboard: &str) -> Result<String> {
    let fragment = fragment_segment(clipboard).ok_or_else(|| {
        Clip2KmlError::malformed(format!("no '{TEXT_FRAGMENT_MARKER}' marker in clipboard text"))
    })?;

    let toponym = if let Some(caps) = RANGE_RE.captures(fragment) {
        decode_component(&caps[1])?
    } else {
        let decoded = decode_component(fragment)?;
        match decoded.find('&') {
            Some(idx) => decoded[..idx].to_string(),
            None => decoded,
        }
    };

    if toponym.is_empty() {
        return Err(Clip2KmlError::malformed("text fragment has an empty place name"));
    }

    Ok(toponym)
}

/// Text between the first marker and the next one (or the end).
fn fragment_segment(clipboard: &str) -> Option<&str> {
    let (_, rest) = clipboard.split_once(TEXT_FRAGMENT_MARKER)?;
    Some(match rest.find(TEXT_FRAGMENT_MARKER) {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Strict form-urlencoded decoding: `+` is a space and every `%` must start
/// a two digit hex escape.
pub fn decode_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'%') {
        let at = pos + offset;
        let valid = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(Clip2KmlError::Decode {
                input: input.to_string(),
                reason: format!("invalid escape at byte {at}"),
            });
        }
        pos = at + 3;
    }

    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| Clip2KmlError::Decode {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
