// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DBC record parser
//!
//! Line-oriented state machine over the input text. Each line is classified
//! by its leading keyword and dispatched to a record decoder; `BO_` opens a
//! message whose following `SG_` lines accumulate until the next non-signal
//! line commits it. The terminating line is then reprocessed in the idle
//! state, so a record directly following a signal block is not lost.

use nom::{
    character::complete::{anychar, char, digit1},
    combinator::{all_consuming, map, map_res},
    number::complete::double,
    sequence::{delimited, separated_pair, tuple},
    IResult,
};

use crate::decoder;
use crate::error::{Error, Result};
use crate::model::{Database, Message};

/// Record kinds recognized by the classifier
///
/// Classification matches the line's first whitespace-delimited token
/// exactly, which keeps the keyword patterns mutually exclusive (`BA_DEF_`
/// never shadows `BA_DEF_DEF_` or `BA_DEF_REL_`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `BU_:` — ECU list
    EcuList,
    /// `BO_` — message header, opens a signal block
    MessageHeader,
    /// `SG_` — signal, valid only inside an open message
    Signal,
    /// `BA_DEF_` / `BA_DEF_REL_` — attribute definition
    AttributeDef,
    /// `BA_DEF_DEF_` / `BA_DEF_DEF_REL_` — attribute default
    AttributeDefault,
    /// `BA_` — attribute value
    AttributeValue,
    /// `BA_REL_` — relation-scoped attribute value
    RelationValue,
    /// `VAL_` — value table
    ValueTable,
    /// `CM_` — comment
    Comment,
    /// Anything else; ignored
    Other,
}

impl RecordKind {
    /// Classify a trimmed line by its leading keyword
    pub fn classify(line: &str) -> RecordKind {
        match line.split_whitespace().next().unwrap_or("") {
            "BU_:" => RecordKind::EcuList,
            "BO_" => RecordKind::MessageHeader,
            "SG_" => RecordKind::Signal,
            "BA_DEF_" | "BA_DEF_REL_" => RecordKind::AttributeDef,
            "BA_DEF_DEF_" | "BA_DEF_DEF_REL_" => RecordKind::AttributeDefault,
            "BA_" => RecordKind::AttributeValue,
            "BA_REL_" => RecordKind::RelationValue,
            "VAL_" => RecordKind::ValueTable,
            "CM_" => RecordKind::Comment,
            _ => RecordKind::Other,
        }
    }
}

/// Parse DBC text into a [`Database`]
///
/// Lines are processed strictly in input order against a fresh aggregate.
/// Returns [`Error::EmptyDatabase`] when no record of any kind was
/// recognized, and fails fast on referential inconsistencies and malformed
/// records (see [`Error`]).
pub fn parse_text(text: &str) -> Result<Database> {
    let mut db = Database::new();
    let mut open: Option<Message> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(mut message) = open.take() {
            if RecordKind::classify(line) == RecordKind::Signal {
                decoder::decode_signal(line, &mut message)?;
                open = Some(message);
                continue;
            }
            // Non-signal line closes the block; the line itself falls
            // through and is dispatched in the idle state below.
            commit(message, &mut db);
        }

        open = dispatch(line, &mut db)?;
    }

    // A message left open at end of input is still committed.
    if let Some(message) = open {
        commit(message, &mut db);
    }

    if db.is_empty() {
        return Err(Error::EmptyDatabase);
    }
    Ok(db)
}

/// Commit a closed message into the aggregate, keyed by its id
fn commit(message: Message, db: &mut Database) {
    if !message.id.is_empty() {
        db.messages.insert(message.id.clone(), message);
    }
}

/// Idle-state dispatch; returns the newly opened message for `BO_` lines
fn dispatch(line: &str, db: &mut Database) -> Result<Option<Message>> {
    match RecordKind::classify(line) {
        RecordKind::MessageHeader => decoder::decode_message_header(line).map(Some),
        RecordKind::EcuList => {
            decoder::decode_ecu_list(line, db);
            Ok(None)
        }
        RecordKind::AttributeDef => decoder::decode_attribute_def(line, db).map(|_| None),
        RecordKind::AttributeDefault => decoder::decode_attribute_default(line, db).map(|_| None),
        RecordKind::AttributeValue => decoder::decode_attribute_value(line, db).map(|_| None),
        RecordKind::RelationValue => decoder::decode_relation_value(line, db).map(|_| None),
        RecordKind::ValueTable => decoder::decode_value_table(line, db).map(|_| None),
        RecordKind::Comment => decoder::decode_comment(line, db).map(|_| None),
        // A stray SG_ outside a message block is ignored, like any
        // unrecognized line.
        RecordKind::Signal | RecordKind::Other => Ok(None),
    }
}

/// Parse a bit-spec token: `3|9@1+`
///
/// Returns (start bit, bit length, byte order flag, byte type flag).
pub fn bit_spec(input: &str) -> IResult<&str, (u32, u32, char, char)> {
    all_consuming(map(
        tuple((
            map_res(digit1, |s: &str| lexical_core::parse::<u32>(s.as_bytes())),
            char('|'),
            map_res(digit1, |s: &str| lexical_core::parse::<u32>(s.as_bytes())),
            char('@'),
            anychar,
            anychar,
        )),
        |(start, _, length, _, order, ty)| (start, length, order, ty),
    ))(input)
}

/// Parse a scale token: `(0.1,-40)` → (factor, offset)
pub fn scale_spec(input: &str) -> IResult<&str, (f64, f64)> {
    all_consuming(delimited(
        char('('),
        separated_pair(double, char(','), double),
        char(')'),
    ))(input)
}

/// Parse a range token: `[0|255]` → (min, max)
pub fn range_spec(input: &str) -> IResult<&str, (f64, f64)> {
    all_consuming(delimited(
        char('['),
        separated_pair(double, char('|'), double),
        char(']'),
    ))(input)
}
