use crate::types::SchemeType;

/// Get the scheme type from the raw scheme bytes.
/// Uses perfect hash based on length + first byte to minimize comparisons.
/// Matching is exact: `HTTP` is an uncommon scheme.
pub fn get_scheme_type(scheme: &[u8]) -> SchemeType {
    // Perfect hash: filter by length first, then first byte, then full comparison
    match (scheme.len(), scheme.first()) {
        (3, Some(b'f')) if scheme == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if scheme == b"http" => SchemeType::Http,
        (4, Some(b'f')) if scheme == b"file" => SchemeType::File,
        (4, Some(b'd')) if scheme == b"data" => SchemeType::Data,
        (5, Some(b'h')) if scheme == b"https" => SchemeType::Https,
        _ => SchemeType::Uncommon,
    }
}
