/// URL constructor over the packed single-buffer store
/// Components are taken from the splitter in a fixed order and validated
/// one at a time; the first failure abandons the whole URL
use super::host::parse_host;
use crate::character_sets::{is_path_char, is_query_fragment_char, is_user_char};
use crate::checkers::parse_port;
use crate::error::{Component, ParseError, Result};
use crate::scheme::get_scheme_type;
use crate::url::{Flags, Url};
use crate::url_aggregator::UrlAggregator;
use crate::url_components::UrlComponents;

/// Find the first byte outside a component's character class.
fn check_characters(text: &[u8], component: Component, allowed: fn(u8) -> bool) -> Result<()> {
    match text.iter().find(|&&b| !allowed(b)) {
        Some(&byte) => Err(ParseError::InvalidCharacter { component, byte }),
        None => Ok(()),
    }
}

/// Parse a URL string into a `Url` (single buffer allocation)
///
/// # Errors
///
/// Returns the first problem found, in component order: scheme, user, host,
/// port, path, query, fragment.
pub fn parse_url(input: &str) -> Result<Url> {
    let bytes = input.as_bytes();
    if u32::try_from(bytes.len()).is_err() {
        return Err(ParseError::InputTooLong);
    }

    let components = UrlComponents::split(bytes);
    let mut url = UrlAggregator::with_capacity(bytes.len());

    // 1. scheme: well-known schemes take no storage
    let scheme = match components.scheme {
        Some(range) => {
            let scheme_type = get_scheme_type(&bytes[range.clone()]);
            if scheme_type.is_stored() {
                url.push_validated(&input[range])?;
            }
            Some(scheme_type)
        }
        None => None,
    };

    // 2. user: invalid characters drop the user instead of failing
    if let Some(range) = components.user {
        let user = &input[range];
        if user.bytes().all(is_user_char) {
            url.push_validated(user)?;
            url.set_flag(Flags::USER);
        }
    }

    // 3. host
    let host = match components.host {
        Some(range) => Some(parse_host(&input[range], &mut url)?),
        None => None,
    };

    // 4. port: a ':' with no digits is port 0
    let port = match components.port {
        Some(range) => Some(parse_port(&bytes[range]).ok_or(ParseError::InvalidPort)?),
        None => None,
    };

    // 5. path: one slot per segment, an empty first segment marks an absolute path
    if !components.path.is_empty() {
        let path = &input[components.path];
        check_characters(path.as_bytes(), Component::Path, is_path_char)?;

        for segment in path.split('/') {
            url.push_validated(segment)?;
        }
        if url.pop_empty_range() {
            url.set_flag(Flags::DIRECTORY);
        }
    }

    // 6. query and fragment
    if let Some(range) = components.query {
        let query = &input[range];
        check_characters(query.as_bytes(), Component::Query, is_query_fragment_char)?;
        url.push_validated(query)?;
        url.set_flag(Flags::QUERY);
    }

    if let Some(range) = components.fragment {
        let fragment = &input[range];
        check_characters(fragment.as_bytes(), Component::Fragment, is_query_fragment_char)?;
        url.push_validated(fragment)?;
        url.set_flag(Flags::FRAGMENT);
    }

    Ok(url.into_url(scheme, host, port))
}
