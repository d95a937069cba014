//! Per-statement parse-tree types for the NWF format.
//!
//! These are the raw extracted fields of one recognized statement, before
//! any uniqueness or reference checking. Lines are recorded where the
//! semantic layer needs them for error reports: each statement keeps the
//! line of its `new` keyword, and each parameter key and pin id keeps the
//! line of its own token so a redefinition is reported at the second
//! occurrence.

use crate::harness::Value;

/// A single `parameter <key> <value>` entry.
#[derive(Debug, Clone)]
pub struct ParamDef {
    pub key: String,
    pub value: Value,
    /// Line of the key token
    pub line: usize,
}

/// A `new wire_spool` statement.
#[derive(Debug, Clone)]
pub struct SpoolDef {
    pub id: String,
    pub params: Vec<ParamDef>,
    /// Line the statement starts on
    pub line: usize,
}

/// One `pin <id> <param>*` clause inside a connector statement.
#[derive(Debug, Clone)]
pub struct PinDef {
    pub id: String,
    pub params: Vec<ParamDef>,
    /// Line of the pin id token
    pub line: usize,
}

/// A `new connector` statement.
#[derive(Debug, Clone)]
pub struct ConnectorDef {
    pub id: String,
    pub params: Vec<ParamDef>,
    pub pins: Vec<PinDef>,
    /// Line the statement starts on
    pub line: usize,
}

/// A `new wire ... attach ...` statement.
#[derive(Debug, Clone)]
pub struct WireDef {
    pub id: String,
    /// Wire type, carried through uninterpreted
    pub wire_type: String,
    pub from_conn: String,
    pub from_pin: String,
    pub to_conn: String,
    pub to_pin: String,
    /// Line the statement starts on
    pub line: usize,
}
