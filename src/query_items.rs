use crate::compat::Cow;
use crate::unicode::percent_encode::unescape;

/// One `name[=value]` pair of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem<'a> {
    pub name: Cow<'a, str>,
    /// None when the pair has no `=`
    pub value: Option<Cow<'a, str>>,
}

/// Iterator over the pairs of a query.
///
/// Pairs are separated by `&` and split at their first `=`; names and values
/// are percent-decoded. Empty pairs are skipped. `+` is not treated as a
/// space.
#[derive(Debug, Clone)]
pub struct QueryItems<'a> {
    pairs: core::str::Split<'a, char>,
}

impl<'a> QueryItems<'a> {
    /// Iterate over an encoded query (without the leading `?`)
    pub fn new(query: &'a str) -> Self {
        Self {
            pairs: query.split('&'),
        }
    }
}

impl<'a> Iterator for QueryItems<'a> {
    type Item = QueryItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.pairs.find(|pair| !pair.is_empty())?;
        let item = match pair.split_once('=') {
            Some((name, value)) => QueryItem {
                name: unescape(name),
                value: Some(unescape(value)),
            },
            None => QueryItem {
                name: unescape(pair),
                value: None,
            },
        };
        Some(item)
    }
}
