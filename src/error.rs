//! Error types for the NWF parsing core.
//!
//! This module provides a unified error type [`CableError`] covering
//! lexical, grammatical, and semantic failures. The `Display` output of
//! the semantic variants is a stable contract that callers match on
//! literally, so the formats here must not drift.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`CableError`].
pub type Result<T> = std::result::Result<T, CableError>;

/// Unified error type for all NWF parsing operations.
///
/// Any error aborts the parse: there is no recovery and no multi-error
/// collection. The first failure in document order is the one surfaced.
#[derive(Error, Debug)]
pub enum CableError {
    // ============ Lexical / Grammar Errors ============
    /// Input that cannot be tokenized
    #[error("Lexer error at line {line}, column {column}: {message}")]
    Lexer {
        line: usize,
        column: usize,
        message: String,
    },

    /// Token stream that does not match the statement grammar
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    // ============ Semantic Errors ============
    /// A second declaration of a name in a namespace that requires
    /// uniqueness, reported at the line of the second occurrence
    #[error("Line {line}: Redefinition of {kind} {name}")]
    Redefinition {
        kind: RedefKind,
        name: String,
        line: usize,
    },

    /// A wire endpoint naming a connector not yet declared
    #[error("Line {line}: Bad wire definition, undefined connector {connector}")]
    UndefinedConnector { connector: String, line: usize },

    /// A wire endpoint naming a pin absent from its connector
    #[error("Line {line}: Bad wire definition, undefined pin {pin} for connector {connector}")]
    UndefinedPin {
        pin: String,
        connector: String,
        line: usize,
    },
}

/// The kind of entity a redefinition error refers to, spelled the way it
/// appears in the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedefKind {
    Parameter,
    Pin,
    Spool,
    Connector,
    Wire,
}

impl fmt::Display for RedefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RedefKind::Parameter => "Parameter",
            RedefKind::Pin => "Pin",
            RedefKind::Spool => "Wire Spool",
            RedefKind::Connector => "Connector",
            RedefKind::Wire => "Wire",
        })
    }
}

impl CableError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Lexer {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a redefinition error at the second occurrence's line
    pub fn redefinition(kind: RedefKind, name: impl Into<String>, line: usize) -> Self {
        Self::Redefinition {
            kind,
            name: name.into(),
            line,
        }
    }

    /// Create an undefined-connector error for a wire endpoint
    pub fn undefined_connector(connector: impl Into<String>, line: usize) -> Self {
        Self::UndefinedConnector {
            connector: connector.into(),
            line,
        }
    }

    /// Create an undefined-pin error for a wire endpoint
    pub fn undefined_pin(
        pin: impl Into<String>,
        connector: impl Into<String>,
        line: usize,
    ) -> Self {
        Self::UndefinedPin {
            pin: pin.into(),
            connector: connector.into(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_templates() {
        assert_eq!(
            CableError::redefinition(RedefKind::Spool, "S1", 4).to_string(),
            "Line 4: Redefinition of Wire Spool S1"
        );
        assert_eq!(
            CableError::redefinition(RedefKind::Parameter, "color", 2).to_string(),
            "Line 2: Redefinition of Parameter color"
        );
        assert_eq!(
            CableError::undefined_connector("C9", 7).to_string(),
            "Line 7: Bad wire definition, undefined connector C9"
        );
        assert_eq!(
            CableError::undefined_pin("P3", "C1", 7).to_string(),
            "Line 7: Bad wire definition, undefined pin P3 for connector C1"
        );
    }
}
