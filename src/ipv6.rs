/// IPv6 literal parsing and serialization
/// Implements the RFC 3986 `IPv6address` rule, including `::` elision and an
/// embedded dotted IPv4 tail
use crate::checkers::parse_hex_group;
use crate::error::{Ipv6Error, ParseError, Result};
use crate::ipv4::parse_ipv4;
use core::fmt::{self, Write};

/// Groups collected left to right before elision is expanded
struct Groups {
    buf: [u16; 8],
    len: usize,
    elision: Option<usize>,
}

impl Groups {
    fn push(&mut self, group: u16) -> Result<()> {
        if self.len == 8 {
            return Err(ParseError::InvalidIpv6(if self.elision.is_some() {
                Ipv6Error::TooManyGroups
            } else {
                Ipv6Error::WrongGroupCount
            }));
        }
        self.buf[self.len] = group;
        self.len += 1;
        Ok(())
    }

    fn mark_elision(&mut self) -> Result<()> {
        if self.elision.is_some() {
            return Err(ParseError::InvalidIpv6(Ipv6Error::MultipleElisions));
        }
        self.elision = Some(self.len);
        Ok(())
    }

    /// Pad at the elision point up to exactly eight groups
    fn finish(self) -> Result<[u16; 8]> {
        let Some(at) = self.elision else {
            if self.len != 8 {
                return Err(ParseError::InvalidIpv6(Ipv6Error::WrongGroupCount));
            }
            return Ok(self.buf);
        };

        if self.len >= 8 {
            return Err(ParseError::InvalidIpv6(Ipv6Error::TooManyGroups));
        }

        let mut segments = [0u16; 8];
        segments[..at].copy_from_slice(&self.buf[..at]);
        let tail = self.len - at;
        segments[8 - tail..].copy_from_slice(&self.buf[at..self.len]);
        Ok(segments)
    }
}

/// Parse the interior of a bracketed IPv6 literal (brackets already removed).
/// Returns the 8 u16 segments if valid, or an error if malformed.
pub fn parse_ipv6(input: &[u8]) -> Result<[u16; 8]> {
    if input.is_empty() {
        return Err(ParseError::InvalidIpv6(Ipv6Error::WrongGroupCount));
    }

    let mut groups = Groups {
        buf: [0; 8],
        len: 0,
        elision: None,
    };
    // start of the group currently being scanned
    let mut start = 0;

    for (i, &b) in input.iter().enumerate() {
        match b {
            b':' => {
                if start < i {
                    let group = parse_hex_group(&input[start..i]).map_err(ParseError::InvalidIpv6)?;
                    groups.push(group)?;
                } else if i == 0 {
                    if input.get(1) != Some(&b':') {
                        return Err(ParseError::InvalidIpv6(Ipv6Error::LeadingColon));
                    }
                } else {
                    if i >= 2 && input[i - 2] == b':' {
                        return Err(ParseError::InvalidIpv6(Ipv6Error::TripleColon));
                    }
                    groups.mark_elision()?;
                }
                start = i + 1;
            }
            b'.' => {
                // embedded IPv4 runs to the end of the literal
                let [o0, o1, o2, o3] = parse_ipv4(&input[start..])?;
                groups.push((u16::from(o0) << 8) | u16::from(o1))?;
                groups.push((u16::from(o2) << 8) | u16::from(o3))?;
                return groups.finish();
            }
            _ => {}
        }
    }

    if start < input.len() {
        let group = parse_hex_group(&input[start..]).map_err(ParseError::InvalidIpv6)?;
        groups.push(group)?;
    } else if groups.elision != Some(groups.len) {
        return Err(ParseError::InvalidIpv6(Ipv6Error::TrailingColon));
    }

    groups.finish()
}

/// Write IPv6 segments with the longest run of zero groups compressed.
/// Brackets are not included.
pub fn write_ipv6<W: Write>(out: &mut W, segments: &[u16; 8]) -> fmt::Result {
    let (compress_start, compress_len) = find_longest_zero_sequence(segments);

    // Only compress sequences of 2+ zeros
    let compress_range = compress_start
        .filter(|_| compress_len > 1)
        .map(|start| start..start + compress_len);

    let mut i = 0;
    let mut after_elision = false;
    while i < 8 {
        if let Some(ref range) = compress_range
            && range.start == i
        {
            out.write_str("::")?;
            i = range.end;
            after_elision = true;
            continue;
        }

        if i > 0 && !after_elision {
            out.write_char(':')?;
        }
        after_elision = false;

        write!(out, "{:x}", segments[i])?;
        i += 1;
    }
    Ok(())
}

/// Find the longest sequence of consecutive zeros in IPv6 segments.
fn find_longest_zero_sequence(segments: &[u16; 8]) -> (Option<usize>, usize) {
    let mut best_start: Option<usize> = None;
    let mut best_len = 0;
    let mut current_start: Option<usize> = None;
    let mut current_len = 0;

    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current_start.is_none() {
                current_start = Some(i);
                current_len = 1;
            } else {
                current_len += 1;
            }
            if current_len > best_len {
                best_start = current_start;
                best_len = current_len;
            }
        } else {
            current_start = None;
            current_len = 0;
        }
    }

    (best_start, best_len)
}
