use crate::character_sets::is_reg_name_char;
use crate::error::{Component, ParseError, Result};
use crate::ipv4::parse_ipv4;
use crate::ipv6::parse_ipv6;
use crate::types::HostType;
use crate::url_aggregator::UrlAggregator;

/// Classify and validate a host.
///
/// - `[...]`: IP literal; only IPv6 is supported
/// - four dotted decimal octets: IPv4
/// - anything else: registered name, stored still encoded
///
/// An empty host is a registered name with no text.
pub(crate) fn parse_host(host: &str, url: &mut UrlAggregator) -> Result<HostType> {
    let bytes = host.as_bytes();

    if let Some(literal) = bytes.strip_prefix(b"[") {
        let address = literal
            .strip_suffix(b"]")
            .ok_or(ParseError::MissingClosingBracket)?;
        if matches!(address.first(), Some(b'v' | b'V')) {
            return Err(ParseError::UnsupportedIpVersion);
        }
        return parse_ipv6(address).map(HostType::Ipv6);
    }

    if let Some(&byte) = bytes.iter().find(|&&b| !is_reg_name_char(b)) {
        return Err(ParseError::InvalidCharacter {
            component: Component::Host,
            byte,
        });
    }

    // a name shaped like an address but out of range stays a registered name
    if let Ok(octets) = parse_ipv4(bytes) {
        return Ok(HostType::Ipv4(octets));
    }

    url.push_validated(host)?;
    Ok(HostType::Registered)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Ipv6Error;

    fn host(input: &str) -> Result<HostType> {
        let mut url = UrlAggregator::with_capacity(input.len());
        parse_host(input, &mut url)
    }

    #[test]
    fn test_ipv4_host() {
        assert_eq!(host("13.22.189.15"), Ok(HostType::Ipv4([13, 22, 189, 15])));
        assert_eq!(host("13.22.189.256"), Ok(HostType::Registered));
        assert_eq!(host("1.2.3"), Ok(HostType::Registered));
    }

    #[test]
    fn test_ipv6_host() {
        assert_eq!(
            host("[CA:FE::BABE:13.22.189.15]"),
            Ok(HostType::Ipv6([0xCA, 0xFE, 0, 0, 0, 0xBABE, 0x0D16, 0xBD0F]))
        );
        assert_eq!(host("[::1"), Err(ParseError::MissingClosingBracket));
        assert_eq!(host("["), Err(ParseError::MissingClosingBracket));
        assert_eq!(host("[v1.fe]"), Err(ParseError::UnsupportedIpVersion));
        assert_eq!(
            host("[]"),
            Err(ParseError::InvalidIpv6(Ipv6Error::WrongGroupCount))
        );
    }

    #[test]
    fn test_registered_host() {
        assert_eq!(host("example.com"), Ok(HostType::Registered));
        assert_eq!(host(""), Ok(HostType::Registered));
        assert_eq!(host("ex%41mple"), Ok(HostType::Registered));
        assert_eq!(host("ex%4"), Err(ParseError::InvalidPercentEncoding));
        assert_eq!(
            host("a]b"),
            Err(ParseError::InvalidCharacter {
                component: Component::Host,
                byte: b']'
            })
        );
    }
}
