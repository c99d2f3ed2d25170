// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Record decoders
//!
//! One decoder per DBC record kind. Each consumes the matched line and
//! merges its fragment into the shared [`Database`], failing fast on
//! malformed fields and on references to entities or attribute definitions
//! that have not been registered yet (the format requires definitions to
//! precede their uses).

use rustc_hash::FxHashMap;

use crate::error::{EntityKind, Error, Result};
use crate::fast_parse::{parse_f64, parse_u32, split_ws, strip_meta, strip_quotes, strip_semicolons};
use crate::model::{
    AttributeDef, AttributeKind, Database, Ecu, Message, Signal, GEN_SIG_START_VALUE,
};
use crate::parser::{bit_spec, range_spec, scale_spec};

/// Scope markers that may follow the keyword of an attribute definition
const DEF_SCOPES: [&str; 4] = ["BU_", "BO_", "SG_", "BU_SG_REL_"];

/// Decode a `BU_:` line: one ECU per whitespace-separated token
pub fn decode_ecu_list(line: &str, db: &mut Database) {
    for name in split_ws(line).iter().skip(1) {
        db.ecus.insert((*name).to_string(), Ecu::new(*name));
    }
}

/// Decode a `BO_` line into a freshly opened message
///
/// Fields: keyword, id, `name:`, data length, sender.
pub fn decode_message_header(line: &str) -> Result<Message> {
    let tokens = split_ws(line);
    if tokens.len() < 5 {
        return Err(Error::malformed("BO_", "expected id, name, length, sender"));
    }
    let name = tokens[2].split(':').next().unwrap_or("");
    Ok(Message {
        id: tokens[1].to_string(),
        name: name.to_string(),
        data_length: tokens[3].to_string(),
        sender: tokens[4].to_string(),
        ..Default::default()
    })
}

/// Decode an `SG_` line into the currently open message
///
/// The text before the colon holds the keyword, signal name, and an
/// optional multiplexing indicator; after the colon follow the bit spec,
/// scale, range, quoted unit, and comma-separated receiver list.
pub fn decode_signal(line: &str, message: &mut Message) -> Result<()> {
    let colon = memchr::memchr(b':', line.as_bytes())
        .ok_or_else(|| Error::malformed("SG_", "missing ':' separator"))?;
    let head = split_ws(&line[..colon]);
    let body = split_ws(&line[colon + 1..]);

    if head.len() < 2 {
        return Err(Error::malformed("SG_", "missing signal name"));
    }
    if body.len() < 5 {
        return Err(Error::malformed(
            "SG_",
            "expected bit spec, scale, range, unit, receivers",
        ));
    }

    let (_, (start_bit, bit_length, byte_order, byte_type)) = bit_spec(body[0])
        .map_err(|_| Error::malformed("SG_", format!("bad bit spec {:?}", body[0])))?;
    let (_, (factor, offset)) = scale_spec(body[1])
        .map_err(|_| Error::malformed("SG_", format!("bad scale {:?}", body[1])))?;
    let (_, (min, max)) = range_spec(body[2])
        .map_err(|_| Error::malformed("SG_", format!("bad range {:?}", body[2])))?;

    let mut receivers = FxHashMap::default();
    for receiver in body[4].split(',') {
        receivers.insert(receiver.to_string(), FxHashMap::default());
    }

    let signal = Signal {
        message_id: message.id.clone(),
        name: head[1].to_string(),
        start_bit,
        bit_length,
        byte_order,
        byte_type,
        factor,
        offset,
        min,
        max,
        unit: strip_quotes(body[3]).to_string(),
        receivers,
        multiplexing: head.get(2).map(|m| (*m).to_string()),
        init_value: None,
        comment: None,
        attributes: FxHashMap::default(),
    };
    message.signals.insert(signal.name.clone(), signal);
    Ok(())
}

/// Decode a `BA_DEF_` / `BA_DEF_REL_` line
///
/// A scope marker after the keyword shifts the name/kind offsets by one;
/// without one the attribute is file-scoped. ENUM consumes all remaining
/// tokens as ordered labels, INT/HEX exactly two as textual bounds.
pub fn decode_attribute_def(line: &str, db: &mut Database) -> Result<()> {
    let stripped = strip_meta(line);
    let data = split_ws(&stripped);

    let name_idx = if data.get(1).is_some_and(|t| DEF_SCOPES.contains(t)) {
        2
    } else {
        1
    };
    let (name, kind_token) = match (data.get(name_idx), data.get(name_idx + 1)) {
        (Some(name), Some(kind)) => (*name, *kind),
        _ => return Err(Error::malformed("BA_DEF_", "expected attribute name and kind")),
    };
    let values = &data[(name_idx + 2).min(data.len())..];

    let kind = match kind_token {
        "ENUM" => AttributeKind::Enum(values.iter().map(|v| (*v).to_string()).collect()),
        "INT" | "HEX" => {
            let (min, max) = match (values.first(), values.get(1)) {
                (Some(min), Some(max)) => ((*min).to_string(), (*max).to_string()),
                _ => {
                    return Err(Error::malformed(
                        "BA_DEF_",
                        format!("{} kind expects min and max bounds", kind_token),
                    ))
                }
            };
            if kind_token == "INT" {
                AttributeKind::Int { min, max }
            } else {
                AttributeKind::Hex { min, max }
            }
        }
        other => AttributeKind::Other(other.to_string()),
    };

    db.attribute_defs.insert(
        name.to_string(),
        AttributeDef {
            name: name.to_string(),
            kind,
        },
    );
    Ok(())
}

/// Decode a `BA_DEF_DEF_` line: attribute name → default value
///
/// Defaults are independent of definitions; no lookup, last write wins.
pub fn decode_attribute_default(line: &str, db: &mut Database) -> Result<()> {
    let stripped = strip_meta(line);
    let data = split_ws(&stripped);
    match (data.get(1), data.get(2)) {
        (Some(name), Some(value)) => {
            db.defaults.insert((*name).to_string(), (*value).to_string());
            Ok(())
        }
        _ => Err(Error::malformed(
            "BA_DEF_DEF_",
            "expected attribute name and default value",
        )),
    }
}

/// Decode a `BA_` line: apply a value for a defined attribute to an ECU,
/// message, signal, or the file itself
pub fn decode_attribute_value(line: &str, db: &mut Database) -> Result<()> {
    let stripped = strip_meta(line);
    let data = split_ws(&stripped);
    if data.len() < 3 {
        return Err(Error::malformed("BA_", "expected attribute name and value"));
    }
    let attr = data[1];
    let def = db
        .attribute_defs
        .get(attr)
        .ok_or_else(|| Error::MissingDefinition {
            attribute: attr.to_string(),
        })?;

    let scope = data[2];
    let raw = match scope {
        "BU_" | "BO_" => *data
            .get(4)
            .ok_or_else(|| Error::malformed("BA_", "expected entity id and value"))?,
        "SG_" => *data
            .get(5)
            .ok_or_else(|| Error::malformed("BA_", "expected message id, signal name, and value"))?,
        _ => scope,
    };

    // An ENUM-typed value is a decimal index into the definition's labels;
    // the label itself is what gets stored.
    let value = match &def.kind {
        AttributeKind::Enum(labels) => {
            let idx = parse_u32(raw)
                .ok_or_else(|| Error::malformed("BA_", format!("bad enum index {:?}", raw)))?;
            labels
                .get(idx as usize)
                .ok_or_else(|| {
                    Error::malformed(
                        "BA_",
                        format!("enum index {} out of range for {:?}", idx, attr),
                    )
                })?
                .clone()
        }
        _ => raw.to_string(),
    };

    match scope {
        "BU_" => {
            let ecu = db
                .ecus
                .get_mut(data[3])
                .ok_or_else(|| Error::missing(EntityKind::Ecu, data[3]))?;
            ecu.attributes.insert(attr.to_string(), value);
        }
        "BO_" => {
            let message = db
                .messages
                .get_mut(data[3])
                .ok_or_else(|| Error::missing(EntityKind::Message, data[3]))?;
            message.attributes.insert(attr.to_string(), value);
        }
        "SG_" => {
            let message = db
                .messages
                .get_mut(data[3])
                .ok_or_else(|| Error::missing(EntityKind::Message, data[3]))?;
            let signal = message
                .signals
                .get_mut(data[4])
                .ok_or_else(|| Error::missing(EntityKind::Signal, data[4]))?;
            if attr == GEN_SIG_START_VALUE {
                let raw_start = parse_f64(&value).ok_or_else(|| {
                    Error::malformed(
                        "BA_",
                        format!("bad {} value {:?}", GEN_SIG_START_VALUE, value),
                    )
                })?;
                signal.init_value = Some(signal.offset + signal.factor * raw_start);
            }
            signal.attributes.insert(attr.to_string(), value);
        }
        _ => {
            db.info.insert(attr.to_string(), value);
        }
    }
    Ok(())
}

/// Decode a `BA_REL_` line: write a value into a signal's per-receiver
/// attribute map
///
/// Stripped tokens at fixed positions: attribute name (1), receiver ECU
/// name (3), message id (5), signal name (6), value (7).
pub fn decode_relation_value(line: &str, db: &mut Database) -> Result<()> {
    let stripped = strip_meta(line);
    let data = split_ws(&stripped);
    if data.len() < 8 {
        return Err(Error::malformed(
            "BA_REL_",
            "expected attribute, receiver, message id, signal name, value",
        ));
    }
    let (attr, receiver, message_id, signal_name, value) =
        (data[1], data[3], data[5], data[6], data[7]);

    let message = db
        .messages
        .get_mut(message_id)
        .ok_or_else(|| Error::missing(EntityKind::Message, message_id))?;
    let signal = message
        .signals
        .get_mut(signal_name)
        .ok_or_else(|| Error::missing(EntityKind::Signal, signal_name))?;
    let attrs = signal
        .receivers
        .get_mut(receiver)
        .ok_or_else(|| Error::missing(EntityKind::Receiver, receiver))?;
    attrs.insert(attr.to_string(), value.to_string());
    Ok(())
}

/// Decode a `VAL_` line: enumerated raw-value labels for one signal
///
/// The pair list is rejoined with single spaces, split on quote-then-space
/// into raw/label pairs, and each pair split on space-then-quote. Nested
/// maps are created lazily; the table is keyed by id/name text, so no
/// entity check applies.
pub fn decode_value_table(line: &str, db: &mut Database) -> Result<()> {
    let stripped = strip_semicolons(line);
    let data = split_ws(&stripped);
    if data.len() < 3 {
        return Err(Error::malformed("VAL_", "expected message id and signal name"));
    }
    let (message_id, signal_name) = (data[1], data[2]);
    let rest = data[3..].join(" ");

    let table = db
        .value_tables
        .entry(message_id.to_string())
        .or_default()
        .entry(signal_name.to_string())
        .or_default();

    for pair in rest.split("\" ") {
        // Trailing artifact of the split
        if pair.trim().is_empty() {
            continue;
        }
        let (raw, label) = pair
            .split_once(" \"")
            .ok_or_else(|| Error::malformed("VAL_", format!("unpaired value {:?}", pair)))?;
        // The final pair keeps its closing quote when the semicolon was
        // glued to it; drop the quote rather than the pair.
        let label = label.strip_suffix('"').unwrap_or(label);
        table.insert(raw.to_string(), label.to_string());
    }
    Ok(())
}

/// Decode a `CM_` line: attach the quoted text to an ECU, message, or
/// signal; any other scope is ignored
pub fn decode_comment(line: &str, db: &mut Database) -> Result<()> {
    let stripped = strip_semicolons(line);
    let open = memchr::memchr(b'"', stripped.as_bytes())
        .ok_or_else(|| Error::malformed("CM_", "missing quoted comment text"))?;
    let rest = &stripped[open + 1..];
    let text = match memchr::memchr(b'"', rest.as_bytes()) {
        Some(close) => &rest[..close],
        None => rest,
    };
    let head = split_ws(&stripped[..open]);

    match head.get(1).copied() {
        Some("BU_") => {
            let name = head
                .get(2)
                .ok_or_else(|| Error::malformed("CM_", "expected ECU name"))?;
            let ecu = db
                .ecus
                .get_mut(*name)
                .ok_or_else(|| Error::missing(EntityKind::Ecu, *name))?;
            ecu.comment = Some(text.to_string());
        }
        Some("BO_") => {
            let id = head
                .get(2)
                .ok_or_else(|| Error::malformed("CM_", "expected message id"))?;
            let message = db
                .messages
                .get_mut(*id)
                .ok_or_else(|| Error::missing(EntityKind::Message, *id))?;
            message.comment = Some(text.to_string());
        }
        Some("SG_") => {
            let (id, name) = match (head.get(2), head.get(3)) {
                (Some(id), Some(name)) => (*id, *name),
                _ => {
                    return Err(Error::malformed(
                        "CM_",
                        "expected message id and signal name",
                    ))
                }
            };
            let message = db
                .messages
                .get_mut(id)
                .ok_or_else(|| Error::missing(EntityKind::Message, id))?;
            let signal = message
                .signals
                .get_mut(name)
                .ok_or_else(|| Error::missing(EntityKind::Signal, name))?;
            signal.comment = Some(text.to_string());
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_text;

    fn base_db() -> Database {
        let text = "BU_: ECU1 ECU2\r\n\
                    BO_ 100 MsgA: 8 ECU1\r\n\
                    SG_ SigA : 0|8@1+ (0.5,2) [0|100] \"km/h\" ECU2\r\n\
                    \r\n";
        parse_text(text).unwrap()
    }

    #[test]
    fn test_message_header_fields() {
        let msg = decode_message_header("BO_ 100 MsgA: 8 ECU1").unwrap();
        assert_eq!(msg.id, "100");
        assert_eq!(msg.name, "MsgA");
        assert_eq!(msg.data_length, "8");
        assert_eq!(msg.sender, "ECU1");
        assert!(msg.signals.is_empty());
    }

    #[test]
    fn test_message_header_too_few_fields() {
        assert!(matches!(
            decode_message_header("BO_ 100 MsgA:"),
            Err(Error::MalformedRecord { keyword: "BO_", .. })
        ));
    }

    #[test]
    fn test_signal_fields() {
        let mut msg = decode_message_header("BO_ 100 MsgA: 8 ECU1").unwrap();
        decode_signal(
            "SG_ Speed : 3|9@1+ (0.1,-40) [-40|11.1] \"km/h\" ECU2,ECU3",
            &mut msg,
        )
        .unwrap();
        let sig = &msg.signals["Speed"];
        assert_eq!(sig.message_id, "100");
        assert_eq!(sig.start_bit, 3);
        assert_eq!(sig.bit_length, 9);
        assert_eq!(sig.byte_order, '1');
        assert_eq!(sig.byte_type, '+');
        assert_eq!(sig.factor, 0.1);
        assert_eq!(sig.offset, -40.0);
        assert_eq!(sig.min, -40.0);
        assert_eq!(sig.max, 11.1);
        assert_eq!(sig.unit, "km/h");
        assert_eq!(sig.receivers.len(), 2);
        assert!(sig.receivers["ECU2"].is_empty());
        assert!(sig.receivers["ECU3"].is_empty());
        assert!(sig.multiplexing.is_none());
    }

    #[test]
    fn test_signal_multiplexing_tag() {
        let mut msg = decode_message_header("BO_ 100 MsgA: 8 ECU1").unwrap();
        decode_signal("SG_ Mode M : 0|2@1+ (1,0) [0|3] \"\" ECU2", &mut msg).unwrap();
        decode_signal("SG_ Detail m1 : 2|6@1+ (1,0) [0|63] \"\" ECU2", &mut msg).unwrap();
        assert_eq!(msg.signals["Mode"].multiplexing.as_deref(), Some("M"));
        assert_eq!(msg.signals["Detail"].multiplexing.as_deref(), Some("m1"));
    }

    #[test]
    fn test_signal_bad_bit_spec_is_malformed() {
        let mut msg = decode_message_header("BO_ 100 MsgA: 8 ECU1").unwrap();
        assert!(matches!(
            decode_signal("SG_ SigA : 0|8 (1,0) [0|255] \"\" ECU2", &mut msg),
            Err(Error::MalformedRecord { keyword: "SG_", .. })
        ));
    }

    #[test]
    fn test_attribute_def_enum_scoped() {
        let mut db = Database::new();
        decode_attribute_def(
            "BA_DEF_ SG_ \"GenSigSendType\" ENUM \"Cyclic\", \"OnChange\", \"NoSend\";",
            &mut db,
        )
        .unwrap();
        let def = &db.attribute_defs["GenSigSendType"];
        assert_eq!(
            def.kind,
            AttributeKind::Enum(vec![
                "Cyclic".to_string(),
                "OnChange".to_string(),
                "NoSend".to_string()
            ])
        );
    }

    #[test]
    fn test_attribute_def_int_bounds_kept_as_text() {
        let mut db = Database::new();
        decode_attribute_def("BA_DEF_ BO_ \"GenMsgCycleTime\" INT 0 65535;", &mut db).unwrap();
        assert_eq!(
            db.attribute_defs["GenMsgCycleTime"].kind,
            AttributeKind::Int {
                min: "0".to_string(),
                max: "65535".to_string()
            }
        );
    }

    #[test]
    fn test_attribute_def_file_scoped_offsets() {
        // No scope marker: name and kind start one position earlier.
        let mut db = Database::new();
        decode_attribute_def("BA_DEF_ \"BusType\" STRING;", &mut db).unwrap();
        assert_eq!(
            db.attribute_defs["BusType"].kind,
            AttributeKind::Other("STRING".to_string())
        );
    }

    #[test]
    fn test_attribute_def_relation_scope() {
        let mut db = Database::new();
        decode_attribute_def(
            "BA_DEF_REL_ BU_SG_REL_ \"GenSigTimeoutTime\" INT 0 65535;",
            &mut db,
        )
        .unwrap();
        assert!(db.attribute_defs.contains_key("GenSigTimeoutTime"));
    }

    #[test]
    fn test_attribute_def_hex_missing_bounds() {
        let mut db = Database::new();
        assert!(matches!(
            decode_attribute_def("BA_DEF_ BO_ \"MsgId\" HEX 0;", &mut db),
            Err(Error::MalformedRecord {
                keyword: "BA_DEF_",
                ..
            })
        ));
    }

    #[test]
    fn test_attribute_def_redefinition_overwrites() {
        let mut db = Database::new();
        decode_attribute_def("BA_DEF_ BO_ \"X\" INT 0 1;", &mut db).unwrap();
        decode_attribute_def("BA_DEF_ BO_ \"X\" INT 0 99;", &mut db).unwrap();
        assert_eq!(
            db.attribute_defs["X"].kind,
            AttributeKind::Int {
                min: "0".to_string(),
                max: "99".to_string()
            }
        );
    }

    #[test]
    fn test_attribute_default() {
        let mut db = Database::new();
        decode_attribute_default("BA_DEF_DEF_ \"GenMsgCycleTime\" 100;", &mut db).unwrap();
        assert_eq!(db.defaults["GenMsgCycleTime"], "100");
    }

    #[test]
    fn test_attribute_value_enum_stores_label() {
        let mut db = base_db();
        decode_attribute_def("BA_DEF_ SG_ \"Switched\" ENUM \"off\", \"on\";", &mut db).unwrap();
        decode_attribute_value("BA_ \"Switched\" SG_ 100 SigA 1;", &mut db).unwrap();
        assert_eq!(db.signal("100", "SigA").unwrap().attributes["Switched"], "on");
    }

    #[test]
    fn test_attribute_value_ecu_scope() {
        let mut db = base_db();
        decode_attribute_def("BA_DEF_ BU_ \"NmNode\" STRING;", &mut db).unwrap();
        decode_attribute_value("BA_ \"NmNode\" BU_ ECU1 yes;", &mut db).unwrap();
        assert_eq!(db.ecus["ECU1"].attributes["NmNode"], "yes");
    }

    #[test]
    fn test_attribute_value_file_scope() {
        let mut db = base_db();
        decode_attribute_def("BA_DEF_ \"BusType\" STRING;", &mut db).unwrap();
        decode_attribute_value("BA_ \"BusType\" \"CAN\";", &mut db).unwrap();
        assert_eq!(db.info["BusType"], "CAN");
    }

    #[test]
    fn test_gen_sig_start_value_derives_init_value() {
        // factor 0.5, offset 2.0, raw 10 → 2.0 + 0.5 * 10 = 7.0
        let mut db = base_db();
        decode_attribute_def("BA_DEF_ SG_ \"GenSigStartValue\" INT 0 65535;", &mut db).unwrap();
        decode_attribute_value("BA_ \"GenSigStartValue\" SG_ 100 SigA 10;", &mut db).unwrap();
        assert_eq!(db.signal("100", "SigA").unwrap().init_value, Some(7.0));
    }

    #[test]
    fn test_attribute_value_without_definition_fails() {
        let mut db = base_db();
        let err = decode_attribute_value("BA_ \"Undeclared\" BU_ ECU1 1;", &mut db).unwrap_err();
        assert!(matches!(err, Error::MissingDefinition { attribute } if attribute == "Undeclared"));
    }

    #[test]
    fn test_attribute_value_unknown_message_fails() {
        let mut db = base_db();
        decode_attribute_def("BA_DEF_ BO_ \"MsgType\" STRING;", &mut db).unwrap();
        assert!(matches!(
            decode_attribute_value("BA_ \"MsgType\" BO_ 999 x;", &mut db),
            Err(Error::MissingEntity {
                kind: EntityKind::Message,
                ..
            })
        ));
    }

    #[test]
    fn test_attribute_value_enum_index_out_of_range() {
        let mut db = base_db();
        decode_attribute_def("BA_DEF_ SG_ \"Switched\" ENUM \"off\", \"on\";", &mut db).unwrap();
        assert!(matches!(
            decode_attribute_value("BA_ \"Switched\" SG_ 100 SigA 5;", &mut db),
            Err(Error::MalformedRecord { keyword: "BA_", .. })
        ));
    }

    #[test]
    fn test_relation_value_populates_receiver_map() {
        let mut db = base_db();
        decode_relation_value(
            "BA_REL_ \"GenSigTimeoutTime\" BU_SG_REL_ ECU2 SG_ 100 SigA 500;",
            &mut db,
        )
        .unwrap();
        let sig = db.signal("100", "SigA").unwrap();
        assert_eq!(sig.receivers["ECU2"]["GenSigTimeoutTime"], "500");
    }

    #[test]
    fn test_relation_value_unknown_receiver_fails() {
        let mut db = base_db();
        assert!(matches!(
            decode_relation_value(
                "BA_REL_ \"GenSigTimeoutTime\" BU_SG_REL_ ECU9 SG_ 100 SigA 500;",
                &mut db,
            ),
            Err(Error::MissingEntity {
                kind: EntityKind::Receiver,
                ..
            })
        ));
    }

    #[test]
    fn test_value_table_pairs() {
        let mut db = Database::new();
        decode_value_table("VAL_ 100 SigA 0 \"off\" 1 \"on\" ;", &mut db).unwrap();
        let table = &db.value_tables["100"]["SigA"];
        assert_eq!(table["0"], "off");
        assert_eq!(table["1"], "on");
    }

    #[test]
    fn test_value_table_semicolon_glued_to_quote() {
        let mut db = Database::new();
        decode_value_table("VAL_ 100 SigA 0 \"off\" 1 \"on\";", &mut db).unwrap();
        let table = &db.value_tables["100"]["SigA"];
        assert_eq!(table.len(), 2);
        assert_eq!(table["1"], "on");
    }

    #[test]
    fn test_value_table_multi_word_labels() {
        let mut db = Database::new();
        decode_value_table("VAL_ 100 SigA 0 \"not active\" 1 \"active\" ;", &mut db).unwrap();
        assert_eq!(db.value_tables["100"]["SigA"]["0"], "not active");
    }

    #[test]
    fn test_comment_scopes() {
        let mut db = base_db();
        decode_comment("CM_ BU_ ECU1 \"first node\";", &mut db).unwrap();
        decode_comment("CM_ BO_ 100 \"main frame\";", &mut db).unwrap();
        decode_comment("CM_ SG_ 100 SigA \"vehicle speed\";", &mut db).unwrap();
        assert_eq!(db.ecus["ECU1"].comment.as_deref(), Some("first node"));
        assert_eq!(db.messages["100"].comment.as_deref(), Some("main frame"));
        assert_eq!(
            db.signal("100", "SigA").unwrap().comment.as_deref(),
            Some("vehicle speed")
        );
    }

    #[test]
    fn test_comment_unknown_scope_is_ignored() {
        let mut db = base_db();
        decode_comment("CM_ \"file level note\";", &mut db).unwrap();
        decode_comment("CM_ EV_ whatever \"env var\";", &mut db).unwrap();
        assert!(db.ecus["ECU1"].comment.is_none());
    }

    #[test]
    fn test_comment_unknown_ecu_fails() {
        let mut db = base_db();
        assert!(matches!(
            decode_comment("CM_ BU_ ECU9 \"nope\";", &mut db),
            Err(Error::MissingEntity {
                kind: EntityKind::Ecu,
                ..
            })
        ));
    }
}
