// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DBC data model
//!
//! The aggregate [`Database`] and the entity types it contains. A database
//! is built incrementally by the parser and is the sole artifact of a parse;
//! every parse starts from a fresh, empty aggregate.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Attribute name that drives a signal's derived initial physical value
pub const GEN_SIG_START_VALUE: &str = "GenSigStartValue";

/// Per-receiver attribute map: receiver ECU name → attribute name → value
pub type ReceiverMap = FxHashMap<String, FxHashMap<String, String>>;

/// Value table: message id → signal name → raw value text → label
pub type ValueTables = FxHashMap<String, FxHashMap<String, FxHashMap<String, String>>>;

/// An electronic control unit declared on the `BU_:` line
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ecu {
    pub name: String,
    /// Comment attached by a `CM_ BU_` record
    pub comment: Option<String>,
    /// Generator/vendor attribute values applied by `BA_` records
    pub attributes: FxHashMap<String, String>,
}

impl Ecu {
    pub fn new(name: impl Into<String>) -> Self {
        Ecu {
            name: name.into(),
            comment: None,
            attributes: FxHashMap::default(),
        }
    }
}

/// A CAN frame definition opened by a `BO_` line
///
/// Signals are keyed by name and kept in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Message identifier, kept as the numeric text from the file
    pub id: String,
    pub name: String,
    /// Frame byte length, kept as text
    pub data_length: String,
    /// Sending ECU name
    pub sender: String,
    pub signals: IndexMap<String, Signal>,
    /// Comment attached by a `CM_ BO_` record
    pub comment: Option<String>,
    /// Generator/vendor attribute values applied by `BA_` records
    pub attributes: FxHashMap<String, String>,
}

/// A bit-field within a message's payload
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    /// Identifier of the owning message
    pub message_id: String,
    pub name: String,
    pub start_bit: u32,
    pub bit_length: u32,
    /// `1` = little-endian (Intel), `0` = big-endian (Motorola)
    pub byte_order: char,
    /// `+` = unsigned, `-` = signed
    pub byte_type: char,
    pub factor: f64,
    pub offset: f64,
    pub min: f64,
    pub max: f64,
    pub unit: String,
    /// Receiver ECU names, each with a per-receiver attribute map
    /// populated later by `BA_REL_` records
    pub receivers: ReceiverMap,
    /// Multiplexor-switch marker (`M`) or multiplexed-group tag (`mN`)
    pub multiplexing: Option<String>,
    /// Derived initial physical value, `offset + factor * raw`; set only
    /// when a `GenSigStartValue` attribute is applied to this signal
    pub init_value: Option<f64>,
    /// Comment attached by a `CM_ SG_` record
    pub comment: Option<String>,
    /// Generator/vendor attribute values applied by `BA_` records
    pub attributes: FxHashMap<String, String>,
}

/// Typed payload of an attribute definition
///
/// INT/HEX bounds are advisory metadata only; the file never requires them
/// to be numeric, so they are kept as text rather than coerced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    /// Ordered label list; a value is stored as the label at its index
    Enum(Vec<String>),
    Int { min: String, max: String },
    Hex { min: String, max: String },
    /// Any other kind token (STRING, FLOAT, ...), carried verbatim
    Other(String),
}

/// A named, typed attribute declared by `BA_DEF_` / `BA_DEF_REL_`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeDef {
    pub name: String,
    pub kind: AttributeKind,
}

/// The parsed DBC database
///
/// All containers start empty; records mutate them in input order. A key
/// reused by a later record overwrites the earlier value, nothing is ever
/// deleted during a parse.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Database {
    /// ECUs keyed by name
    pub ecus: FxHashMap<String, Ecu>,
    /// Messages keyed by identifier text
    pub messages: FxHashMap<String, Message>,
    /// Attribute defaults keyed by attribute name (`BA_DEF_DEF_`)
    pub defaults: FxHashMap<String, String>,
    /// Enumerated raw-value labels (`VAL_`)
    pub value_tables: ValueTables,
    /// Attribute definitions keyed by attribute name
    pub attribute_defs: FxHashMap<String, AttributeDef>,
    /// File-scoped attribute values
    pub info: FxHashMap<String, String>,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no record of any kind has been recognized
    pub fn is_empty(&self) -> bool {
        self.ecus.is_empty()
            && self.messages.is_empty()
            && self.defaults.is_empty()
            && self.value_tables.is_empty()
            && self.attribute_defs.is_empty()
            && self.info.is_empty()
    }

    /// Look up a signal by owning message id and signal name
    pub fn signal(&self, message_id: &str, name: &str) -> Option<&Signal> {
        self.messages.get(message_id)?.signals.get(name)
    }
}
