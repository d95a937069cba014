//! Parser for the NWF statement grammar.

use super::ast::{ConnectorDef, ParamDef, PinDef, SpoolDef, WireDef};
use super::lexer::{is_identifier, Lexer, Token, TokenKind};
use crate::error::{CableError, Result};
use crate::harness::{Harness, Value};

/// Recursive-descent parser over the NWF token stream.
///
/// Each recognized statement is committed to the harness before the next
/// one is read, so semantic errors surface in strict document order and a
/// wire can only reference connectors that textually precede it.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire document, committing statements as they are
    /// recognized. A document is one or more statements.
    pub fn parse(&mut self) -> Result<Harness> {
        let mut harness = Harness::new();

        if self.current.kind == TokenKind::Eof {
            return Err(CableError::parse(
                self.current.line,
                "expected at least one statement",
            ));
        }
        while self.current.kind != TokenKind::Eof {
            self.parse_statement(&mut harness)?;
        }

        Ok(harness)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Keywords are matched case-insensitively and only in keyword
    /// position; the same spellings remain usable as plain identifiers.
    fn at_keyword(&self, keyword: &str) -> bool {
        self.current.kind == TokenKind::Identifier
            && self.current.text.eq_ignore_ascii_case(keyword)
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<Token> {
        if self.at_keyword(keyword) {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(CableError::parse(
                self.current.line,
                format!("expected '{}', got {}", keyword, describe(&self.current)),
            ))
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<Token> {
        // All-digit names are legal NWF identifiers; the lexer hands them
        // over as numbers, so accept a number token whose text stays
        // within the identifier charset.
        let ok = match self.current.kind {
            TokenKind::Identifier => true,
            TokenKind::Number => is_identifier(&self.current.text),
            _ => false,
        };
        if ok {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(CableError::parse(
                self.current.line,
                format!("expected {}, got {}", what, describe(&self.current)),
            ))
        }
    }

    fn parse_statement(&mut self, harness: &mut Harness) -> Result<()> {
        let line = self.expect_keyword("new")?.line;

        if self.at_keyword("wire_spool") {
            self.advance()?;
            let def = self.parse_spool(line)?;
            harness.commit_spool(def)
        } else if self.at_keyword("connector") {
            self.advance()?;
            let def = self.parse_connector(line)?;
            harness.commit_connector(def)
        } else if self.at_keyword("wire") {
            self.advance()?;
            let def = self.parse_wire(line)?;
            harness.commit_wire(def)
        } else {
            Err(CableError::parse(
                self.current.line,
                format!(
                    "expected 'wire_spool', 'connector' or 'wire', got {}",
                    describe(&self.current)
                ),
            ))
        }
    }

    fn parse_spool(&mut self, line: usize) -> Result<SpoolDef> {
        let id = self.expect_identifier("spool id")?.text;
        let params = self.parse_param_list()?;
        Ok(SpoolDef { id, params, line })
    }

    fn parse_connector(&mut self, line: usize) -> Result<ConnectorDef> {
        let id = self.expect_identifier("connector id")?.text;
        let params = self.parse_param_list()?;
        let pins = self.parse_pin_list()?;
        Ok(ConnectorDef {
            id,
            params,
            pins,
            line,
        })
    }

    fn parse_wire(&mut self, line: usize) -> Result<WireDef> {
        let id = self.expect_identifier("wire id")?.text;
        let wire_type = self.expect_identifier("wire type")?.text;
        self.expect_keyword("attach")?;
        let from_conn = self.expect_identifier("source connector")?.text;
        let from_pin = self.expect_identifier("source pin")?.text;
        let to_conn = self.expect_identifier("destination connector")?.text;
        let to_pin = self.expect_identifier("destination pin")?.text;
        Ok(WireDef {
            id,
            wire_type,
            from_conn,
            from_pin,
            to_conn,
            to_pin,
            line,
        })
    }

    fn parse_param_list(&mut self) -> Result<Vec<ParamDef>> {
        let mut params = Vec::new();
        while self.at_keyword("parameter") {
            self.advance()?;
            let key = self.expect_identifier("parameter key")?;
            let value = self.parse_value()?;
            params.push(ParamDef {
                key: key.text,
                value,
                line: key.line,
            });
        }
        Ok(params)
    }

    fn parse_pin_list(&mut self) -> Result<Vec<PinDef>> {
        let mut pins = Vec::new();
        while self.at_keyword("pin") {
            self.advance()?;
            let id = self.expect_identifier("pin id")?;
            let params = self.parse_param_list()?;
            pins.push(PinDef {
                id: id.text,
                params,
                line: id.line,
            });
        }
        Ok(pins)
    }

    fn parse_value(&mut self) -> Result<Value> {
        let value = match self.current.kind {
            TokenKind::QuotedString => Value::Str(self.current.text.clone()),
            TokenKind::Number => Value::Number(self.current.text.clone()),
            TokenKind::Identifier => Value::Ident(self.current.text.clone()),
            TokenKind::Eof => {
                return Err(CableError::parse(
                    self.current.line,
                    "expected parameter value, got end of input",
                ));
            }
        };
        self.advance()?;
        Ok(value)
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_string(),
        _ => format!("'{}'", token.text),
    }
}
