/// Byte classification for the RFC 3986 component grammars
/// Every class is ASCII-only, so anything at or above 0x80 is rejected by
/// all of them

const SCHEME: u8 = 1 << 0;
const USER: u8 = 1 << 1;
const REG_NAME: u8 = 1 << 2;
const PATH: u8 = 1 << 3;
const QUERY_FRAGMENT: u8 = 1 << 4;
const HEX: u8 = 1 << 5;

/// unreserved / pct-encoded / sub-delims, shared by every class except scheme
const COMMON: u8 = USER | REG_NAME | PATH | QUERY_FRAGMENT;

const CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = SCHEME | COMMON;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = SCHEME | COMMON;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = SCHEME | COMMON | HEX;
        i += 1;
    }
    let mut i = b'a';
    while i <= b'f' {
        table[i as usize] |= HEX;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'F' {
        table[i as usize] |= HEX;
        i += 1;
    }

    // unreserved punctuation
    table[b'-' as usize] = SCHEME | COMMON;
    table[b'.' as usize] = SCHEME | COMMON;
    table[b'_' as usize] = COMMON;
    table[b'~' as usize] = COMMON;

    // pct-encoded marker
    table[b'%' as usize] = COMMON;

    // sub-delims
    table[b'!' as usize] = COMMON;
    table[b'$' as usize] = COMMON;
    table[b'&' as usize] = COMMON;
    table[b'\'' as usize] = COMMON;
    table[b'(' as usize] = COMMON;
    table[b')' as usize] = COMMON;
    table[b'*' as usize] = COMMON;
    table[b'+' as usize] = SCHEME | COMMON;
    table[b',' as usize] = COMMON;
    table[b';' as usize] = COMMON;
    table[b'=' as usize] = COMMON;

    table[b':' as usize] = USER | PATH | QUERY_FRAGMENT;
    table[b'@' as usize] = PATH | QUERY_FRAGMENT;
    table[b'/' as usize] = PATH | QUERY_FRAGMENT;
    table[b'?' as usize] = QUERY_FRAGMENT;

    table
};

#[inline]
fn has_class(b: u8, class: u8) -> bool {
    CHAR_TABLE[b as usize] & class != 0
}

/// ALPHA / DIGIT / "+" / "-" / "."
#[inline]
pub fn is_scheme_char(b: u8) -> bool {
    has_class(b, SCHEME)
}

/// unreserved / pct-encoded / sub-delims / ":"
#[inline]
pub fn is_user_char(b: u8) -> bool {
    has_class(b, USER)
}

/// unreserved / pct-encoded / sub-delims
#[inline]
pub fn is_reg_name_char(b: u8) -> bool {
    has_class(b, REG_NAME)
}

/// unreserved / pct-encoded / sub-delims / ":" / "@" / "/"
#[inline]
pub fn is_path_char(b: u8) -> bool {
    has_class(b, PATH)
}

/// Path characters plus "?"
#[inline]
pub fn is_query_fragment_char(b: u8) -> bool {
    has_class(b, QUERY_FRAGMENT)
}

#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    has_class(b, HEX)
}

/// Value of a single hex digit, either case
#[inline]
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
