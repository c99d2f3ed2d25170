// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for DBC parsing

use thiserror::Error;

/// Result type for DBC operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or parsing a DBC database
#[derive(Error, Debug)]
pub enum Error {
    /// The source bytes could not be read
    #[error("failed to read DBC source: {0}")]
    Io(#[from] std::io::Error),

    /// The remote source answered with a non-success status
    #[cfg(feature = "fetch")]
    #[error("DBC fetch returned status {status}")]
    Http { status: u16 },

    /// The remote source could not be reached
    #[cfg(feature = "fetch")]
    #[error("DBC fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// No record of any kind was recognized in the input
    #[error("no DBC records recognized in input")]
    EmptyDatabase,

    /// An attribute value record referenced an attribute with no prior definition
    #[error("attribute value references undefined attribute {attribute:?}")]
    MissingDefinition { attribute: String },

    /// A record referenced an ECU, message, signal, or receiver that has not been registered
    #[error("{kind} {name:?} referenced before its declaration")]
    MissingEntity { kind: EntityKind, name: String },

    /// A recognized record carried too few fields or an unparsable field
    #[error("malformed {keyword} record: {reason}")]
    MalformedRecord { keyword: &'static str, reason: String },
}

/// Entity categories reported by [`Error::MissingEntity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Ecu,
    Message,
    Signal,
    Receiver,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Ecu => write!(f, "ECU"),
            EntityKind::Message => write!(f, "message"),
            EntityKind::Signal => write!(f, "signal"),
            EntityKind::Receiver => write!(f, "receiver"),
        }
    }
}

impl Error {
    /// Shorthand for a malformed-record error
    pub(crate) fn malformed(keyword: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            keyword,
            reason: reason.into(),
        }
    }

    /// Shorthand for a missing-entity error
    pub(crate) fn missing(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::MissingEntity {
            kind,
            name: name.into(),
        }
    }
}
