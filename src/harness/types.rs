//! Entity tables for a parsed harness.

use std::collections::HashMap;
use std::fmt;

/// A scalar attribute value from the NWF source.
///
/// The numeric form keeps its source text verbatim; the core never
/// interprets values beyond classifying them at the lexical level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Double-quoted text, surrounding quotes removed
    Str(String),
    /// Decimal number, source text preserved
    Number(String),
    /// Bare identifier
    Ident(String),
}

impl Value {
    /// The value's text, regardless of form.
    pub fn text(&self) -> &str {
        match self {
            Value::Str(s) | Value::Number(s) | Value::Ident(s) => s,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Parameters attached to a spool, a connector, or a pin.
pub type ParamMap = HashMap<String, Value>;

/// A wire-stock declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Spool {
    pub params: ParamMap,
}

/// A component exposing a set of pins, each uniquely named within the
/// connector and carrying its own parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub params: ParamMap,
    pub pins: HashMap<String, ParamMap>,
}

/// One side of a wire: a (connector, pin) address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub connector: String,
    pub pin: String,
}

/// A named link between two connector pins.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    /// Wire type, carried through uninterpreted
    pub wire_type: String,
    pub from: Endpoint,
    pub to: Endpoint,
}

/// The three entity tables produced by a successful parse.
///
/// Spool, connector, and wire ids occupy independent namespaces. Tables
/// are populated in document order and an entry is never mutated after
/// its statement commits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Harness {
    pub spools: HashMap<String, Spool>,
    pub connectors: HashMap<String, Connector>,
    pub wires: HashMap<String, Wire>,
}

impl Harness {
    /// Create an empty harness.
    pub fn new() -> Self {
        Self::default()
    }
}
