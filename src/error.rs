/// URL component a character-class failure was reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Host,
    Path,
    Query,
    Fragment,
}

impl Component {
    fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

/// Reason an IPv6 literal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ipv6Error {
    /// `:::` somewhere in the literal
    TripleColon,
    /// More than one `::`
    MultipleElisions,
    /// Literal starts with a single `:`
    LeadingColon,
    /// Literal ends with a single `:`
    TrailingColon,
    /// Group longer than four hex digits
    GroupTooLong,
    /// Non-hex character inside a group
    InvalidHexDigit,
    /// Elided literal already holds eight or more groups
    TooManyGroups,
    /// Literal without elision does not hold exactly eight groups
    WrongGroupCount,
}

/// Errors that can occur during URL parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Byte outside the character class of a component
    InvalidCharacter { component: Component, byte: u8 },
    /// `%` not followed by two hex digits
    InvalidPercentEncoding,
    /// Bracketed host without a closing `]`
    MissingClosingBracket,
    /// `[v...]` IP literal
    UnsupportedIpVersion,
    /// Invalid IPv6 address
    InvalidIpv6(Ipv6Error),
    /// Invalid IPv4 address
    InvalidIpv4,
    /// Invalid port number
    InvalidPort,
    /// Input longer than `u32::MAX` bytes
    InputTooLong,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCharacter { component, byte } => {
                if byte.is_ascii_graphic() {
                    write!(
                        f,
                        "character '{}' not allowed in {}",
                        char::from(*byte),
                        component.as_str()
                    )
                } else {
                    write!(
                        f,
                        "byte 0x{byte:02X} not allowed in {}",
                        component.as_str()
                    )
                }
            }
            Self::InvalidPercentEncoding => {
                f.write_str("percent encoding must contain 2 hex digits")
            }
            Self::MissingClosingBracket => {
                f.write_str("IPv6 literal is missing closing square bracket")
            }
            Self::UnsupportedIpVersion => f.write_str("IP version > 6 literals are unsupported"),
            Self::InvalidIpv6(reason) => {
                let msg = match reason {
                    Ipv6Error::TripleColon => "three or more consecutive colons in IPv6 literal",
                    Ipv6Error::MultipleElisions => "more than one elision in IPv6 literal",
                    Ipv6Error::LeadingColon => "IPv6 literal cannot begin with a single colon",
                    Ipv6Error::TrailingColon => "IPv6 literal cannot end with a single colon",
                    Ipv6Error::GroupTooLong => "IPv6 group overflows 16 bits",
                    Ipv6Error::InvalidHexDigit => "invalid hex digit in IPv6 literal",
                    Ipv6Error::TooManyGroups => "elided IPv6 literal contains too many groups",
                    Ipv6Error::WrongGroupCount => "IPv6 literal must contain exactly 8 groups",
                };
                f.write_str(msg)
            }
            Self::InvalidIpv4 => f.write_str("Invalid IPv4 address"),
            Self::InvalidPort => f.write_str("port must be a decimal number below 65536"),
            Self::InputTooLong => f.write_str("URL exceeds 4 GiB"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
