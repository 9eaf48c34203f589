//! Non-ASCII escape codec for character-restricted transports.
//!
//! Ledger message fields only carry ASCII text, so payloads are escaped
//! before fragmentation and unescaped after reassembly. Every character
//! above U+007F is written as `\u` followed by four lowercase hex digits per
//! UTF-16 code unit. Characters outside the Basic Multilingual Plane
//! therefore become two escapes, one per surrogate half, and decoding
//! re-pairs adjacent halves.
//!
//! Both directions treat absent or empty input as "nothing to transport" and
//! return `None` rather than an empty string.
//!
//! Text that already contains a literal `\u` followed by four hex digits is
//! not protected by [`encode_non_ascii`], so [`decode_non_ascii`] rewrites it.

use std::fmt::Write;

const ESCAPE_PREFIX: &str = "\\u";
const ESCAPE_DIGITS: usize = 4;

/// Replace every non-ASCII character with its `\uXXXX` escape.
///
/// Returns `None` when `value` is absent or empty.
///
/// # Examples
///
/// ```
/// use bundleframe::escape::encode_non_ascii;
/// assert_eq!(encode_non_ascii("café").as_deref(), Some("caf\\u00e9"));
/// assert_eq!(encode_non_ascii(None), None);
/// assert_eq!(encode_non_ascii(""), None);
/// ```
#[must_use]
pub fn encode_non_ascii<'a>(value: impl Into<Option<&'a str>>) -> Option<String> {
    let value = value.into().filter(|text| !text.is_empty())?;

    let mut escaped = String::with_capacity(value.len());
    let mut units = [0_u16; 2];
    for ch in value.chars() {
        if ch.is_ascii() {
            escaped.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            // Writing into a `String` cannot fail.
            let _ = write!(escaped, "{ESCAPE_PREFIX}{unit:04x}");
        }
    }
    Some(escaped)
}

/// Replace every `\uXXXX` escape with the UTF-16 code unit it names.
///
/// Hex digits are matched case-insensitively. Text that does not form a
/// complete escape passes through unchanged. Surrogate escapes that do not
/// form a valid pair decode to U+FFFD.
///
/// Returns `None` when `value` is absent or empty.
///
/// # Examples
///
/// ```
/// use bundleframe::escape::decode_non_ascii;
/// assert_eq!(decode_non_ascii("caf\\u00E9").as_deref(), Some("café"));
/// assert_eq!(decode_non_ascii("\\ud83d\\ude00").as_deref(), Some("😀"));
/// assert_eq!(decode_non_ascii(None), None);
/// ```
#[must_use]
pub fn decode_non_ascii<'a>(value: impl Into<Option<&'a str>>) -> Option<String> {
    let value = value.into().filter(|text| !text.is_empty())?;

    let mut units: Vec<u16> = Vec::with_capacity(value.len());
    let mut rest = value;
    while let Some(position) = rest.find(ESCAPE_PREFIX) {
        let (literal, escape) = rest.split_at(position);
        units.extend(literal.encode_utf16());
        let digits = &escape[ESCAPE_PREFIX.len()..];

        if let Some(unit) = parse_code_unit(digits) {
            units.push(unit);
            rest = &digits[ESCAPE_DIGITS..];
        } else {
            units.extend(ESCAPE_PREFIX.encode_utf16());
            rest = digits;
        }
    }
    units.extend(rest.encode_utf16());

    Some(String::from_utf16_lossy(&units))
}

fn parse_code_unit(text: &str) -> Option<u16> {
    let digits = text.get(..ESCAPE_DIGITS)?;
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}
