use crate::compat::{Box, Cow, Vec};
use crate::error::{ParseError, Result};
use crate::ipv4::write_ipv4;
use crate::ipv6::write_ipv6;
use crate::parser::parse_url;
use crate::query_items::QueryItems;
use crate::types::{Host, HostType, Scheme, SchemeType};
use crate::unicode::percent_encode::unescape;
use core::fmt::{self, Write};
use core::ops::Range;
use core::str::FromStr;

/// Presence bits for components that are not implied by the scheme or host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct Flags(u8);

impl Flags {
    pub(crate) const USER: Self = Self(0b0001);
    pub(crate) const QUERY: Self = Self(0b0010);
    pub(crate) const FRAGMENT: Self = Self(0b0100);
    pub(crate) const DIRECTORY: Self = Self(0b1000);

    pub(crate) fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

/// An immutable, parsed RFC 3986 URL
///
/// Components that may carry percent-escapes are kept encoded in one packed
/// buffer and decoded by the accessors. The position of a component in the
/// range list is never stored; it follows from which components are present:
/// `[scheme?, user?, host?, path_1 .. path_n, query?, fragment?]`
///
/// # Examples
///
/// ```
/// use packed_url::{Host, Scheme, Url};
///
/// let url = Url::parse("foo://taylor@example.com:1989/over/there?with=hellagood#hair")?;
/// assert_eq!(url.scheme(), Some(Scheme::Uncommon("foo")));
/// assert_eq!(url.user().as_deref(), Some("taylor"));
/// assert_eq!(url.host(), Some(Host::Registered("example.com".into())));
/// assert_eq!(url.port(), Some(1989));
/// assert_eq!(url.path_segments(), ["/", "over", "there"]);
/// assert_eq!(url.query().as_deref(), Some("with=hellagood"));
/// assert_eq!(url.fragment().as_deref(), Some("hair"));
/// # Ok::<(), packed_url::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Url {
    buffer: Box<str>,
    ranges: Box<[Range<u32>]>,
    scheme: Option<SchemeType>,
    host: Option<HostType>,
    port: Option<u16>,
    flags: Flags,
}

impl Url {
    /// Parse a URL string.
    ///
    /// Either the whole input is valid and a URL is returned, or the first
    /// invalid component is reported and nothing is built.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first invalid component.
    pub fn parse(input: &str) -> Result<Self> {
        parse_url(input)
    }

    /// Check if a URL string can be parsed
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_url::Url;
    ///
    /// assert!(Url::can_parse("http://example.com"));
    /// assert!(Url::can_parse("/relative/path"));
    /// assert!(!Url::can_parse("http://exa mple.com"));
    /// ```
    pub fn can_parse(input: &str) -> bool {
        parse_url(input).is_ok()
    }

    pub(crate) fn from_parts(
        buffer: Box<str>,
        ranges: Box<[Range<u32>]>,
        scheme: Option<SchemeType>,
        host: Option<HostType>,
        port: Option<u16>,
        flags: Flags,
    ) -> Self {
        Self {
            buffer,
            ranges,
            scheme,
            host,
            port,
            flags,
        }
    }

    /// Get a stored component by slot (zero-copy, still encoded)
    fn get_component(&self, index: usize) -> &str {
        self.ranges
            .get(index)
            .and_then(|range| self.buffer.get(range.start as usize..range.end as usize))
            .unwrap_or("")
    }

    fn scheme_slots(&self) -> usize {
        usize::from(self.scheme.is_some_and(SchemeType::is_stored))
    }

    fn user_slots(&self) -> usize {
        usize::from(self.flags.contains(Flags::USER))
    }

    fn host_slots(&self) -> usize {
        usize::from(self.host.is_some_and(HostType::is_stored))
    }

    fn query_slots(&self) -> usize {
        usize::from(self.flags.contains(Flags::QUERY))
    }

    fn fragment_slots(&self) -> usize {
        usize::from(self.flags.contains(Flags::FRAGMENT))
    }

    /// Slots holding path segments
    fn path_slots(&self) -> Range<usize> {
        let prefix = self.scheme_slots() + self.user_slots() + self.host_slots();
        let suffix = self.query_slots() + self.fragment_slots();
        prefix..self.ranges.len().saturating_sub(suffix).max(prefix)
    }

    pub fn scheme_type(&self) -> Option<SchemeType> {
        self.scheme
    }

    pub fn scheme(&self) -> Option<Scheme<'_>> {
        let scheme = match self.scheme? {
            // scheme cannot contain percent escapes
            SchemeType::Uncommon => Scheme::Uncommon(self.get_component(0)),
            SchemeType::Http => Scheme::Http,
            SchemeType::Https => Scheme::Https,
            SchemeType::File => Scheme::File,
            SchemeType::Data => Scheme::Data,
            SchemeType::Ftp => Scheme::Ftp,
        };
        Some(scheme)
    }

    /// The user information, still percent-encoded
    pub fn raw_user(&self) -> Option<&str> {
        self.flags
            .contains(Flags::USER)
            .then(|| self.get_component(self.scheme_slots()))
    }

    pub fn user(&self) -> Option<Cow<'_, str>> {
        self.raw_user().map(unescape)
    }

    pub fn host(&self) -> Option<Host<'_>> {
        let host = match self.host? {
            HostType::Ipv4(octets) => Host::Ipv4(octets),
            HostType::Ipv6(segments) => Host::Ipv6(segments),
            HostType::Registered => Host::Registered(unescape(self.raw_host())),
        };
        Some(host)
    }

    /// Registered host name as stored; empty for IP literals
    fn raw_host(&self) -> &str {
        if self.host.is_some_and(HostType::is_stored) {
            self.get_component(self.scheme_slots() + self.user_slots())
        } else {
            ""
        }
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Path segments as stored, still percent-encoded.
    /// An absolute path starts with an empty segment.
    pub fn raw_path_segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.path_slots().map(|index| self.get_component(index))
    }

    /// Decoded path segments.
    /// The first element of an absolute path is `"/"`; a trailing slash is
    /// reported by [`Url::has_directory_path`] rather than as an empty element.
    pub fn path_segments(&self) -> Vec<Cow<'_, str>> {
        self.raw_path_segments()
            .enumerate()
            .map(|(i, segment)| {
                if i == 0 && segment.is_empty() {
                    Cow::Borrowed("/")
                } else {
                    unescape(segment)
                }
            })
            .collect()
    }

    pub fn has_directory_path(&self) -> bool {
        self.flags.contains(Flags::DIRECTORY)
    }

    /// The query, still percent-encoded
    pub fn raw_query(&self) -> Option<&str> {
        self.flags.contains(Flags::QUERY).then(|| {
            let index = self.ranges.len() - 1 - self.fragment_slots();
            self.get_component(index)
        })
    }

    pub fn query(&self) -> Option<Cow<'_, str>> {
        self.raw_query().map(unescape)
    }

    /// Iterate over the `name=value` pairs of the query
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_url::Url;
    ///
    /// let url = Url::parse("/search?q=past%20tours&new-user")?;
    /// let items: Vec<_> = url.query_items().collect();
    /// assert_eq!(items[0].name, "q");
    /// assert_eq!(items[0].value.as_deref(), Some("past tours"));
    /// assert_eq!(items[1].name, "new-user");
    /// assert_eq!(items[1].value, None);
    /// # Ok::<(), packed_url::ParseError>(())
    /// ```
    pub fn query_items(&self) -> QueryItems<'_> {
        QueryItems::new(self.raw_query().unwrap_or(""))
    }

    /// The fragment, still percent-encoded
    pub fn raw_fragment(&self) -> Option<&str> {
        self.flags
            .contains(Flags::FRAGMENT)
            .then(|| self.get_component(self.ranges.len() - 1))
    }

    pub fn fragment(&self) -> Option<Cow<'_, str>> {
        self.raw_fragment().map(unescape)
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Serializes the stored (still encoded) components.
/// Parsing the output gives back an equal URL.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = self.scheme() {
            f.write_str(scheme.as_str())?;
            f.write_char(':')?;
        }

        if let Some(host) = self.host {
            f.write_str("//")?;
            if let Some(user) = self.raw_user() {
                f.write_str(user)?;
                f.write_char('@')?;
            }
            match host {
                HostType::Ipv4(octets) => write_ipv4(f, octets)?,
                HostType::Ipv6(segments) => {
                    f.write_char('[')?;
                    write_ipv6(f, &segments)?;
                    f.write_char(']')?;
                }
                HostType::Registered => f.write_str(self.raw_host())?,
            }
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }

        for (i, segment) in self.raw_path_segments().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }
            f.write_str(segment)?;
        }
        if self.has_directory_path() {
            f.write_char('/')?;
        }

        if let Some(query) = self.raw_query() {
            f.write_char('?')?;
            f.write_str(query)?;
        }
        if let Some(fragment) = self.raw_fragment() {
            f.write_char('#')?;
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

/// Structured dump of the decoded components
impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Url")
            .field("scheme", &self.scheme())
            .field("user", &self.user())
            .field("host", &self.host())
            .field("port", &self.port)
            .field("path", &self.path_segments())
            .field("directory", &self.has_directory_path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}
