use crate::compat::Cow;
use crate::ipv4::write_ipv4;
use crate::ipv6::write_ipv6;
use core::fmt;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeType {
    Http,
    Https,
    File,
    Data,
    Ftp,
    /// Any other scheme; its text is kept in the URL's buffer
    Uncommon,
}

impl SchemeType {
    /// Whether the scheme text occupies a slot in the packed buffer
    pub fn is_stored(self) -> bool {
        self == Self::Uncommon
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http => Some(80),
            Self::Https => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::Data | Self::Uncommon => None,
        }
    }
}

/// Scheme of a parsed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme<'a> {
    Http,
    Https,
    File,
    Data,
    Ftp,
    /// Scheme text exactly as written in the input
    Uncommon(&'a str),
}

impl<'a> Scheme<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Http => "http",
            Self::Https => "https",
            Self::File => "file",
            Self::Data => "data",
            Self::Ftp => "ftp",
            Self::Uncommon(text) => text,
        }
    }

    pub fn scheme_type(&self) -> SchemeType {
        match self {
            Self::Http => SchemeType::Http,
            Self::Https => SchemeType::Https,
            Self::File => SchemeType::File,
            Self::Data => SchemeType::Data,
            Self::Ftp => SchemeType::Ftp,
            Self::Uncommon(_) => SchemeType::Uncommon,
        }
    }
}

impl fmt::Display for Scheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host of a parsed URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host<'a> {
    Ipv4([u8; 4]),
    Ipv6([u16; 8]),
    /// Registered name, percent-decoded
    Registered(Cow<'a, str>),
}

impl Host<'_> {
    /// The address of an IP literal host
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match *self {
            Self::Ipv4(octets) => Some(IpAddr::V4(Ipv4Addr::from(octets))),
            Self::Ipv6(segments) => Some(IpAddr::V6(Ipv6Addr::from(segments))),
            Self::Registered(_) => None,
        }
    }
}

/// IPv4 as dotted decimal, IPv6 compressed and without brackets, registered
/// names decoded
impl fmt::Display for Host<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(octets) => write_ipv4(f, *octets),
            Self::Ipv6(segments) => write_ipv6(f, segments),
            Self::Registered(name) => f.write_str(name),
        }
    }
}

/// Parsed host as kept inside a URL; a registered name lives in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum HostType {
    Ipv4([u8; 4]),
    Ipv6([u16; 8]),
    Registered,
}

impl HostType {
    /// Whether the host text occupies a slot in the packed buffer
    pub(crate) fn is_stored(self) -> bool {
        matches!(self, Self::Registered)
    }
}
