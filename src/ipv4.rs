/// Dotted-decimal IPv4 parser
/// RFC 3986 `IPv4address`: exactly four decimal octets, no hex or octal forms
use crate::checkers::parse_decimal;
use crate::error::{ParseError, Result};
use core::fmt::{self, Write};

/// Parse an IPv4 address into its four octets.
/// Empty pieces between dots are skipped, so `1..2.3.4` and `1.2.3.4.` are
/// `1.2.3.4`. Leading zeros are accepted; every piece is at most 255.
pub fn parse_ipv4(input: &[u8]) -> Result<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut count = 0;

    for piece in input.split(|&b| b == b'.').filter(|piece| !piece.is_empty()) {
        if count == 4 {
            return Err(ParseError::InvalidIpv4);
        }
        let value = parse_decimal(piece).ok_or(ParseError::InvalidIpv4)?;
        octets[count] = u8::try_from(value).map_err(|_| ParseError::InvalidIpv4)?;
        count += 1;
    }

    if count != 4 {
        return Err(ParseError::InvalidIpv4);
    }
    Ok(octets)
}

/// Write an IPv4 address in dotted decimal notation
pub fn write_ipv4<W: Write>(out: &mut W, octets: [u8; 4]) -> fmt::Result {
    write!(
        out,
        "{}.{}.{}.{}",
        octets[0], octets[1], octets[2], octets[3]
    )
}
