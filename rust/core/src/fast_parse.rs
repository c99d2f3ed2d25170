// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Low-level field helpers
//!
//! Token stripping/splitting and fast number parsing shared by the record
//! decoders. Uses fast-float for floats and lexical-core for integers.

use smallvec::SmallVec;

/// Whitespace-split token buffer; DBC records rarely exceed a dozen fields
pub type Tokens<'a> = SmallVec<[&'a str; 16]>;

/// Split a line on ASCII whitespace into a stack-allocated token buffer
#[inline]
pub fn split_ws(line: &str) -> Tokens<'_> {
    line.split_whitespace().collect()
}

/// Remove the quote, comma, and semicolon characters used as decoration in
/// attribute records, leaving whitespace-separable bare tokens
#[inline]
pub fn strip_meta(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, '"' | ',' | ';'))
        .collect()
}

/// Remove semicolons only (value-table records keep their quotes)
#[inline]
pub fn strip_semicolons(line: &str) -> String {
    line.chars().filter(|c| *c != ';').collect()
}

/// Strip surrounding double quotes from a token
#[inline]
pub fn strip_quotes(token: &str) -> &str {
    token.trim_matches('"')
}

/// Parse a float field, e.g. a factor, offset, or raw start value
#[inline]
pub fn parse_f64(token: &str) -> Option<f64> {
    fast_float::parse::<f64, _>(token).ok()
}

/// Parse an unsigned integer field, e.g. a start bit or an enum index
#[inline]
pub fn parse_u32(token: &str) -> Option<u32> {
    lexical_core::parse::<u32>(token.as_bytes()).ok()
}
