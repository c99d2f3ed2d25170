// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DBC-Lite Core Parser
//!
//! Line-oriented parser for the CAN-bus DBC database format, built with
//! [nom](https://docs.rs/nom) field parsers over a keyword-dispatched state
//! machine.
//!
//! ## Overview
//!
//! This crate parses DBC text into a queryable in-memory [`Database`]:
//!
//! - **ECUs** from `BU_:` lines
//! - **Messages and signals** from `BO_`/`SG_` blocks
//! - **Attribute definitions, defaults, and values** from `BA_DEF_`,
//!   `BA_DEF_DEF_`, `BA_`, and `BA_REL_` records
//! - **Value tables** from `VAL_` records
//! - **Comments** from `CM_` records
//!
//! Definitions must precede their uses: a record referencing an unknown
//! attribute definition, ECU, message, or signal aborts the parse with a
//! [`MissingDefinition`](Error::MissingDefinition) or
//! [`MissingEntity`](Error::MissingEntity) error rather than silently
//! skipping it.
//!
//! ## Quick Start
//!
//! ```rust
//! use dbc_lite_core::parse_text;
//!
//! let text = "BU_: ECU1 ECU2\r\n\
//!             BO_ 100 MsgA: 8 ECU1\r\n\
//!             SG_ SigA : 0|8@1+ (1,0) [0|255] \"\" ECU2\r\n\
//!             \r\n";
//! let db = parse_text(text).unwrap();
//!
//! let msg = &db.messages["100"];
//! assert_eq!(msg.name, "MsgA");
//! assert_eq!(msg.signals["SigA"].bit_length, 8);
//! ```
//!
//! Files on disk (traditionally ISO-8859-15 encoded) go through the loader:
//!
//! ```rust,ignore
//! let db = dbc_lite_core::parse_file("vehicle.dbc")?;
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for the parsed model
//! - `fetch`: `parse_url` for HTTP-hosted DBC files

pub mod decoder;
pub mod error;
pub mod fast_parse;
pub mod loader;
pub mod model;
pub mod parser;

pub use error::{EntityKind, Error, Result};
pub use loader::{decode_latin9, parse_file};
#[cfg(feature = "fetch")]
pub use loader::parse_url;
pub use model::{
    AttributeDef, AttributeKind, Database, Ecu, Message, Signal, GEN_SIG_START_VALUE,
};
pub use parser::{parse_text, RecordKind};
