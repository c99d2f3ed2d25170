// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DBC source loading
//!
//! Thin I/O shim around the core parser: reads bytes from a file (or, with
//! the `fetch` feature, over HTTP), decodes them as ISO-8859-15, and hands
//! the text to [`parse_text`]. DBC files are traditionally exported in that
//! single-byte encoding, not UTF-8.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Database;
use crate::parser::parse_text;

/// Decode ISO-8859-15 (Latin-9) bytes into a string
///
/// Identical to Latin-1 except for the eight revised code points
/// (€ Š š Ž ž Œ œ Ÿ). Total: every byte maps to exactly one char.
pub fn decode_latin9(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0xA4 => '\u{20AC}', // €
            0xA6 => '\u{0160}', // Š
            0xA8 => '\u{0161}', // š
            0xB4 => '\u{017D}', // Ž
            0xB8 => '\u{017E}', // ž
            0xBC => '\u{0152}', // Œ
            0xBD => '\u{0153}', // œ
            0xBE => '\u{0178}', // Ÿ
            other => other as char,
        })
        .collect()
}

/// Parse a DBC file from disk
///
/// Read failures surface as [`Error::Io`](crate::Error::Io); input in which
/// no record is recognized surfaces as
/// [`Error::EmptyDatabase`](crate::Error::EmptyDatabase).
pub fn parse_file(path: impl AsRef<Path>) -> Result<Database> {
    let bytes = fs::read(path)?;
    parse_text(&decode_latin9(&bytes))
}

/// Parse a DBC file fetched over HTTP
///
/// A non-success status is reported as
/// [`Error::Http`](crate::Error::Http) without invoking the parser.
#[cfg(feature = "fetch")]
pub fn parse_url(url: &str) -> Result<Database> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(crate::Error::Http {
            status: status.as_u16(),
        });
    }
    let bytes = response.bytes()?;
    parse_text(&decode_latin9(&bytes))
}
