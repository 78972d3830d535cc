use crate::character_sets::is_hex_digit;
use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters
/// ALPHA / DIGIT / "-" / "." / "_" / "~" pass through
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Check that every `%` in `input` is followed by exactly two hex digits.
pub fn validate_percent_encoding(input: &[u8]) -> Result<()> {
    let mut hex_digits = 0u8;

    for (i, &b) in input.iter().enumerate() {
        if hex_digits == 0 {
            if b == b'%' {
                if i + 2 >= input.len() {
                    return Err(ParseError::InvalidPercentEncoding);
                }
                hex_digits = 2;
            }
        } else if is_hex_digit(b) {
            hex_digits -= 1;
        } else {
            return Err(ParseError::InvalidPercentEncoding);
        }
    }

    Ok(())
}

/// Decode an already validated component.
/// Invalid UTF-8 after decoding is replaced with U+FFFD. Borrows when there
/// is nothing to decode.
pub fn unescape(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

/// Percent-encode everything outside the unreserved set, using uppercase hex.
///
/// # Examples
///
/// ```
/// use packed_url::encode_component;
///
/// assert_eq!(encode_component("past tours"), "past%20tours");
/// assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
/// ```
pub fn encode_component(input: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    for chunk in utf8_percent_encode(input, COMPONENT_SET) {
        buffer.push_str(chunk);
    }
    buffer
}
