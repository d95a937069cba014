//! Parser for the NWF wire-harness description format.
//!
//! NWF is a plain-text format describing a harness as wire spools,
//! connectors with pins, and wires attached between connector pins.
//! Whitespace (including newlines) only separates tokens, so statements
//! may span lines freely.
//!
//! # Grammar Overview
//!
//! ```text
//! document  = statement+
//! statement = "new" ( spool | connector | wire )
//! spool     = "wire_spool" id param*
//! connector = "connector" id param* ( "pin" id param* )*
//! wire      = "wire" id type "attach" conn pin conn pin
//! param     = "parameter" key value
//!
//! value     = quoted_string | number | identifier
//! number    = [('+'|'-')] digit+ ['.' digit+]
//! identifier = (letter | digit | '_' | '-')+
//! comment   = '!' { any_char }            (to end of line)
//! ```
//!
//! Keywords are case-insensitive and reserved only in keyword position.
//! A bare word is classified by longest match between the number and
//! identifier forms, numeric winning ties; see [`Lexer::next_token`].
//!
//! Statements are validated against the growing harness as they are
//! recognized: ids must be unique per table, pin ids unique per
//! connector, parameter keys unique per list, and a wire may only attach
//! to connector pins already declared above it. The first grammar or
//! semantic error aborts the parse.
//!
//! Multi-conductor cable spools are not handled.
//!
//! # Example
//!
//! ```text
//! ! guitar patch lead
//! new wire_spool hookup22 parameter awg 22
//! new connector J1 parameter housing "TS" pin tip pin sleeve
//! new connector J2 parameter housing "TS" pin tip pin sleeve
//! new wire W1 hookup22 attach J1 tip J2 tip
//! new wire W2 hookup22 attach J1 sleeve J2 sleeve
//! ```

pub mod ast;
mod lexer;
mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;
use crate::harness::Harness;

/// Parse an NWF document into its harness tables.
///
/// Returns the three entity tables on success, or the first grammar or
/// semantic error in document order. Nothing from a failing statement is
/// committed.
pub fn parse(input: &str) -> Result<Harness> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}
