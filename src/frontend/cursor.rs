//! A cursor over a lexed token sequence.

use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::ParseError;
use crate::utils::location::SourceLocation;

/// A forward-only cursor into a token slice.
///
/// The cursor borrows the token sequence; the parser consumes tokens
/// through it and never moves backwards.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor at the start of a token sequence.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// True when every token has been consumed.
    pub fn done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The location of the next token, or of the end of input.
    pub fn location(&self) -> SourceLocation {
        match self.peek() {
            Some(tok) => tok.location,
            None => self
                .tokens
                .last()
                .map(|t| t.location)
                .unwrap_or_default(),
        }
    }

    /// Consume the next token unconditionally.
    pub fn bump(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// Consume the next token if its kind is one of `expected`,
    /// otherwise fail with a description of what was required.
    pub fn expect(
        &mut self,
        expected: &'static [TokenKind],
        what: &'static str,
    ) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(tok) if expected.contains(&tok.kind) => {
                self.pos += 1;
                Ok(tok)
            }
            Some(tok) => Err(ParseError::UnexpectedToken {
                expected: what,
                found: tok.lexeme.clone(),
                location: tok.location,
            }),
            None => Err(ParseError::UnexpectedToken {
                expected: what,
                found: "end of input".to_string(),
                location: self.location(),
            }),
        }
    }
}
