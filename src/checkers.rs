use crate::character_sets::hex_value;
use crate::error::Ipv6Error;

/// Parse a non-empty run of ASCII decimal digits.
/// Returns None on any other byte or on `u32` overflow.
pub fn parse_decimal(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

/// Parse a port string to u16.
/// An empty port is 0. Returns None on non-digit characters or overflow.
pub fn parse_port(port: &[u8]) -> Option<u16> {
    if port.is_empty() {
        return Some(0);
    }
    parse_decimal(port).and_then(|value| u16::try_from(value).ok())
}

/// Parse one IPv6 group of at most four hex digits.
pub fn parse_hex_group(group: &[u8]) -> Result<u16, Ipv6Error> {
    if group.len() > 4 {
        return Err(Ipv6Error::GroupTooLong);
    }
    group.iter().try_fold(0u16, |acc, &b| {
        let digit = hex_value(b).ok_or(Ipv6Error::InvalidHexDigit)?;
        Ok((acc << 4) | u16::from(digit))
    })
}
