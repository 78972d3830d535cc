use crate::compat::{String, Vec};
use crate::error::Result;
use crate::types::{HostType, SchemeType};
use crate::unicode::percent_encode::validate_percent_encoding;
use crate::url::{Flags, Url};
use core::ops::Range;

/// Packed store that a URL is assembled into during parsing
///
/// Every stored component is appended verbatim (still percent-encoded) to a
/// single buffer, and its range is recorded in canonical order:
/// `[scheme?, user?, host?, path_1 .. path_n, query?, fragment?]`
///
/// Example for "foo://taylor@example.com/over/there?with=hellagood#hair":
/// - buffer: "footaylorexample.comovertherewith=hellagoodhair"
/// - ranges: scheme, user, host, "", "over", "there", query, fragment
#[derive(Debug)]
pub(crate) struct UrlAggregator {
    buffer: String,
    ranges: Vec<Range<u32>>,
    flags: Flags,
}

impl UrlAggregator {
    /// Create a store sized for the input, which bounds the packed length
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            ranges: Vec::new(),
            flags: Flags::default(),
        }
    }

    /// Append a component after checking its percent-escapes.
    /// This is the only way bytes enter the buffer.
    pub(crate) fn push_validated(&mut self, component: &str) -> Result<()> {
        validate_percent_encoding(component.as_bytes())?;

        let start = self.buffer.len() as u32;
        self.buffer.push_str(component);
        self.ranges.push(start..self.buffer.len() as u32);
        Ok(())
    }

    /// Drop the last range if it is empty, reporting whether it did.
    /// Empty ranges add nothing to the buffer, so it stays contiguous.
    pub(crate) fn pop_empty_range(&mut self) -> bool {
        if self.ranges.last().is_some_and(Range::is_empty) {
            self.ranges.pop();
            true
        } else {
            false
        }
    }

    pub(crate) fn set_flag(&mut self, flag: Flags) {
        self.flags.insert(flag);
    }

    pub(crate) fn into_url(
        self,
        scheme: Option<SchemeType>,
        host: Option<HostType>,
        port: Option<u16>,
    ) -> Url {
        Url::from_parts(
            self.buffer.into_boxed_str(),
            self.ranges.into_boxed_slice(),
            scheme,
            host,
            port,
            self.flags,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_push_validated() {
        let mut store = UrlAggregator::with_capacity(16);
        store.push_validated("past%20tours").unwrap();
        store.push_validated("").unwrap();
        assert_eq!(store.buffer, "past%20tours");
        assert_eq!(store.ranges, [0..12, 12..12]);
    }

    #[test]
    fn test_push_rejects_bad_escape() {
        let mut store = UrlAggregator::with_capacity(16);
        store.push_validated("ok").unwrap();
        assert_eq!(
            store.push_validated("50%2"),
            Err(ParseError::InvalidPercentEncoding)
        );
        // nothing from the failed push is recorded
        assert_eq!(store.buffer, "ok");
        assert_eq!(store.ranges.len(), 1);
    }

    #[test]
    fn test_pop_empty_range() {
        let mut store = UrlAggregator::with_capacity(8);
        store.push_validated("a").unwrap();
        assert!(!store.pop_empty_range());
        store.push_validated("").unwrap();
        assert!(store.pop_empty_range());
        assert_eq!(store.ranges, [0..1]);
    }
}
