//! Lexer (tokenizer) for the NWF format.

use crate::error::{CableError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text (surrounding quotes removed for strings)
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the NWF format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier; keywords are resolved by the parser, not here
    Identifier,
    /// A decimal number, source text preserved verbatim
    Number,
    /// A double-quoted string, no escape processing
    QuotedString,
    /// End of input
    Eof,
}

/// True for the characters an NWF identifier may contain.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// True when `text` is a well-formed NWF identifier.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_ident_char)
}

/// Lexer for tokenizing NWF input.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given input.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    ///
    /// Unquoted words are resolved by longest match between the number
    /// form and the identifier form; on a tie (an all-digit word such as
    /// `123`, or a signed one like `-5`) the numeric form wins. So
    /// `abc123` and `123abc` are identifiers while `123` and `-4.5` are
    /// numbers.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let (line, column) = (self.line, self.column);
        let ch = match self.peek() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line,
                    column,
                });
            }
        };

        if ch == '"' {
            return self.read_quoted_string(line, column);
        }

        let number_len = self.match_number();
        let ident_len = self.match_identifier();
        if number_len == 0 && ident_len == 0 {
            return Err(CableError::lexer(
                line,
                column,
                format!("unexpected character '{}'", ch),
            ));
        }

        let (kind, len) = if ident_len > number_len {
            (TokenKind::Identifier, ident_len)
        } else {
            (TokenKind::Number, number_len)
        };
        let text: String = self.chars[self.pos..self.pos + len].iter().collect();
        // Word characters never include a newline
        self.pos += len;
        self.column += len;

        Ok(Token {
            kind,
            text,
            line,
            column,
        })
    }

    fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.char_at(self.pos)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '!' {
                // Comment until end of line
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Length of the longest number match at the current position:
    /// optional sign, one or more digits, optional `.` plus digits.
    /// A trailing `.` without digits is not part of the number.
    fn match_number(&self) -> usize {
        let mut i = self.pos;
        if matches!(self.char_at(i), Some('+') | Some('-')) {
            i += 1;
        }
        let digits_start = i;
        while matches!(self.char_at(i), Some(c) if c.is_ascii_digit()) {
            i += 1;
        }
        if i == digits_start {
            return 0;
        }
        if self.char_at(i) == Some('.')
            && matches!(self.char_at(i + 1), Some(c) if c.is_ascii_digit())
        {
            i += 1;
            while matches!(self.char_at(i), Some(c) if c.is_ascii_digit()) {
                i += 1;
            }
        }
        i - self.pos
    }

    /// Length of the longest identifier match at the current position.
    fn match_identifier(&self) -> usize {
        let mut i = self.pos;
        while matches!(self.char_at(i), Some(c) if is_ident_char(c)) {
            i += 1;
        }
        i - self.pos
    }

    fn read_quoted_string(&mut self, line: usize, column: usize) -> Result<Token> {
        self.advance(); // opening quote
        let mut text = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(CableError::lexer(line, column, "unterminated string literal"));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
        Ok(Token {
            kind: TokenKind::QuotedString,
            text,
            line,
            column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                break;
            }
        }
        tokens
    }

    fn single(input: &str) -> Token {
        let toks = all_tokens(input);
        assert_eq!(toks.len(), 2, "expected one token in {:?}", input);
        toks[0].clone()
    }

    #[test]
    fn test_lexer_basic() {
        let toks = all_tokens("new wire_spool S1");
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[0].text, "new");
        assert_eq!(toks[1].text, "wire_spool");
        assert_eq!(toks[2].text, "S1");
        assert_eq!(toks[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_longest_match_disambiguation() {
        assert_eq!(single("123").kind, TokenKind::Number);
        assert_eq!(single("-4.5").kind, TokenKind::Number);
        assert_eq!(single("+7").kind, TokenKind::Number);
        assert_eq!(single("abc123").kind, TokenKind::Identifier);
        // Identifier consumes 6 chars, number only 3
        let tok = single("123abc");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "123abc");
        // Dashes are identifier characters, so "-1" ties and goes numeric
        assert_eq!(single("-1").kind, TokenKind::Number);
        assert_eq!(single("P-1").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_quoted_string() {
        let tok = single("\"hello world\"");
        assert_eq!(tok.kind, TokenKind::QuotedString);
        assert_eq!(tok.text, "hello world");
        // Quotes stripped, content untouched
        assert_eq!(single("\"123\"").text, "123");
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("\"abc");
        assert!(lexer.next_token().is_err());
        let mut lexer = Lexer::new("\"abc\ndef\"");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_comments_skipped() {
        let toks = all_tokens("alpha ! the rest is noise\nbeta");
        assert_eq!(toks[0].text, "alpha");
        assert_eq!(toks[1].text, "beta");
        assert_eq!(toks[1].line, 2);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let toks = all_tokens("a b\n  c");
        assert_eq!((toks[0].line, toks[0].column), (1, 1));
        assert_eq!((toks[1].line, toks[1].column), (1, 3));
        assert_eq!((toks[2].line, toks[2].column), (2, 3));
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("@");
        let err = lexer.next_token().unwrap_err();
        assert!(err.to_string().contains("unexpected character '@'"));
    }

    #[test]
    fn test_trailing_dot_not_consumed() {
        let toks = all_tokens("5 x");
        assert_eq!(toks[0].kind, TokenKind::Number);
        let mut lexer = Lexer::new("5.");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.text, "5");
        // The dangling dot is not a token of any kind
        assert!(lexer.next_token().is_err());
    }
}
