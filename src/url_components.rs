use crate::character_sets::is_scheme_char;
use core::ops::Range;

/// Raw component ranges located in the input, before any validation
///
/// Layout for "foo://taylor@example.com:1989/over/there?with=hellagood#hair":
/// - `scheme`: "foo"
/// - `user`: "taylor"
/// - `host`: "example.com"
/// - `port`: "1989"
/// - `path`: "/over/there"
/// - `query`: "with=hellagood"
/// - `fragment`: "hair"
///
/// Delimiters (`:`, `//`, `@`, `?`, `#`) are not part of any range. Only the
/// scheme is known to be well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: Option<Range<usize>>,
    pub user: Option<Range<usize>>,
    pub host: Option<Range<usize>>,
    pub port: Option<Range<usize>>,
    pub path: Range<usize>,
    pub query: Option<Range<usize>>,
    pub fragment: Option<Range<usize>>,
}

impl UrlComponents {
    /// Split `input` into component ranges. Never fails.
    pub fn split(input: &[u8]) -> Self {
        let mut components = Self::default();
        let mut active = 0..input.len();

        // 1. fragment: everything after the first '#'
        if let Some(hash) = memchr::memchr(b'#', input) {
            components.fragment = Some(hash + 1..active.end);
            active.end = hash;
        }

        // 2. query: everything after the first '?' that precedes the fragment
        if let Some(question) = memchr::memchr(b'?', &input[active.clone()]) {
            let question = active.start + question;
            components.query = Some(question + 1..active.end);
            active.end = question;
        }

        // 3. scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
        if input.first().is_some_and(u8::is_ascii_alphabetic) {
            for i in active.clone() {
                let b = input[i];
                if b == b':' {
                    components.scheme = Some(active.start..i);
                    active.start = i + 1;
                    break;
                } else if !is_scheme_char(b) {
                    break;
                }
            }
        }

        // 4. authority: "//" [ user "@" ] host [ ":" port ]
        if input[active.clone()].starts_with(b"//") {
            active.start += 2;

            let authority_end = memchr::memchr(b'/', &input[active.clone()])
                .map_or(active.end, |slash| active.start + slash);
            let mut authority = active.start..authority_end;

            if let Some(at) = memchr::memchr(b'@', &input[authority.clone()]) {
                let at = authority.start + at;
                components.user = Some(authority.start..at);
                authority.start = at + 1;
            }

            // the port colon is the rightmost ':' not followed by a ']'
            match memchr::memrchr2(b':', b']', &input[authority.clone()]) {
                Some(pos) if input[authority.start + pos] == b':' => {
                    let colon = authority.start + pos;
                    components.host = Some(authority.start..colon);
                    components.port = Some(colon + 1..authority.end);
                }
                _ => components.host = Some(authority),
            }

            active.start = authority_end;
        }

        // 5. whatever is left is the path
        components.path = active;
        components
    }
}
