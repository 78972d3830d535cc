#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod ipv4;
mod ipv6;
mod parser;
mod query_items;
mod scheme;
mod types;
mod unicode;
mod url;
mod url_aggregator;
mod url_components;

// Public API
pub use error::{Component, Ipv6Error, ParseError, Result};
pub use query_items::{QueryItem, QueryItems};
pub use types::{Host, Scheme, SchemeType};
pub use unicode::percent_encode::{encode_component, unescape};
pub use url::Url;
