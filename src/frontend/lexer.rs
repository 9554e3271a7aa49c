//! Lexical analysis.
//!
//! The lexer runs six independent recognizers at every position and
//! keeps the longest match (maximal munch). When two recognizers
//! produce the same length, the one listed first wins, so keywords
//! shadow same-length identifiers. There is no recovery: the first
//! position where nothing matches aborts the pass.

use crate::frontend::token::{Token, TokenKind, KEYWORDS};
use crate::utils::errors::LexError;
use crate::utils::location::SourceLocation;

/// Remove `#` comments from source text.
///
/// Everything from a `#` to the end of its line is dropped. The `#`
/// is not special inside string or character literals, so comments are
/// stripped before tokenisation with that caveat accepted by the
/// language.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (i, line) in source.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match line.find('#') {
            Some(pos) => out.push_str(&line[..pos]),
            None => out.push_str(line),
        }
    }
    if source.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Tokenise a complete source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

/// A candidate produced by one recognizer: how many bytes it would
/// consume and what kind of token results.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    len: usize,
    kind: TokenKind,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            input: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }

            let location = SourceLocation::new(self.line, self.column);
            let rest = &self.input[self.pos..];

            // Run every recognizer and keep the longest candidate.
            // A strictly longer match replaces the current best, so a
            // tie is resolved in favour of the earlier recognizer.
            let mut best: Option<Candidate> = None;
            let candidates = [
                recognize_keyword(rest),
                recognize_identifier(rest),
                recognize_int_literal(rest),
                recognize_real_literal(rest),
                recognize_character_literal(rest),
                recognize_string_literal(rest),
            ];
            for candidate in candidates.into_iter().flatten() {
                if best.map_or(true, |b| candidate.len > b.len) {
                    best = Some(candidate);
                }
            }

            let best = best.ok_or(LexError::InvalidToken { location })?;
            let lexeme = std::str::from_utf8(&rest[..best.len])
                .map_err(|_| LexError::InvalidToken { location })?;
            tokens.push(Token::new(best.kind, lexeme, location));
            self.advance(best.len);
        }
        log::debug!("tokenised {} tokens", tokens.len());
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            if self.input[self.pos] == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    fn advance(&mut self, len: usize) {
        // Lexemes never contain newlines.
        self.pos += len;
        self.column += len;
    }
}

/// Longest keyword or operator spelling that prefixes the input.
fn recognize_keyword(input: &[u8]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (text, kind) in KEYWORDS {
        let bytes = text.as_bytes();
        if input.starts_with(bytes) && best.map_or(true, |b| bytes.len() > b.len) {
            best = Some(Candidate {
                len: bytes.len(),
                kind: *kind,
            });
        }
    }
    best
}

/// Identifier: a letter followed by letters, digits and underscores.
fn recognize_identifier(input: &[u8]) -> Option<Candidate> {
    if input.is_empty() || !input[0].is_ascii_alphabetic() {
        return None;
    }
    let mut len = 1;
    while len < input.len()
        && (input[len].is_ascii_alphanumeric() || input[len] == b'_')
    {
        len += 1;
    }
    Some(Candidate {
        len,
        kind: TokenKind::Identifier,
    })
}

/// True when the literal ending at `len` is properly delimited: number
/// literals must run up to whitespace or the end of input.
fn delimited(input: &[u8], len: usize) -> bool {
    len >= input.len() || input[len].is_ascii_whitespace()
}

/// Integer literal: optional minus sign then digits, delimited.
fn recognize_int_literal(input: &[u8]) -> Option<Candidate> {
    let start = if input.first() == Some(&b'-') { 1 } else { 0 };
    let mut len = start;
    while len < input.len() && input[len].is_ascii_digit() {
        len += 1;
    }
    // A sign with no digits is not a literal.
    if len == start || !delimited(input, len) {
        return None;
    }
    Some(Candidate {
        len,
        kind: TokenKind::IntLit,
    })
}

/// Real literal: optional minus sign, digits, exactly one interior
/// dot, digits, delimited.
fn recognize_real_literal(input: &[u8]) -> Option<Candidate> {
    let start = if input.first() == Some(&b'-') { 1 } else { 0 };
    let mut len = start;
    while len < input.len() && input[len].is_ascii_digit() {
        len += 1;
    }
    if len == start || len >= input.len() || input[len] != b'.' {
        return None;
    }
    let after_dot = len + 1;
    len = after_dot;
    while len < input.len() && input[len].is_ascii_digit() {
        len += 1;
    }
    if len == after_dot || !delimited(input, len) {
        return None;
    }
    Some(Candidate {
        len,
        kind: TokenKind::RealLit,
    })
}

/// Character literal: `'x'`, or the escaped form `'\x'`.
fn recognize_character_literal(input: &[u8]) -> Option<Candidate> {
    if input.first() != Some(&b'\'') {
        return None;
    }
    if input.len() >= 4 && input[1] == b'\\' && input[3] == b'\'' {
        return Some(Candidate {
            len: 4,
            kind: TokenKind::CharacterLit,
        });
    }
    if input.len() >= 3 && input[1] != b'\'' && input[1] != b'\n' && input[2] == b'\'' {
        return Some(Candidate {
            len: 3,
            kind: TokenKind::CharacterLit,
        });
    }
    None
}

/// String literal: double quotes around any run of characters that
/// does not include a raw newline.
fn recognize_string_literal(input: &[u8]) -> Option<Candidate> {
    if input.first() != Some(&b'"') {
        return None;
    }
    let mut len = 1;
    while len < input.len() {
        match input[len] {
            b'"' => {
                return Some(Candidate {
                    len: len + 1,
                    kind: TokenKind::StringLit,
                })
            }
            b'\n' => return None,
            _ => len += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("tokenise failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("SET Value TO 10"),
            vec![
                TokenKind::Set,
                TokenKind::Identifier,
                TokenKind::To,
                TokenKind::IntLit
            ]
        );
    }

    #[test]
    fn test_identifier_beats_keyword_prefix() {
        // INTEGERX is longer than the keyword INTEGER, so the
        // identifier recognizer wins.
        let toks = tokenize("INTEGERX").unwrap();
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[0].lexeme, "INTEGERX");
    }

    #[test]
    fn test_keyword_beats_identifier_on_tie() {
        let toks = tokenize("INTEGER").unwrap();
        assert_eq!(toks[0].kind, TokenKind::Integer);
    }

    #[test]
    fn test_compound_relational_operators() {
        assert_eq!(kinds("<>"), vec![TokenKind::NotEqualTo]);
        assert_eq!(kinds(">="), vec![TokenKind::GreaterThanEq]);
        assert_eq!(kinds("<="), vec![TokenKind::LessThanEq]);
        assert_eq!(
            kinds("< >"),
            vec![TokenKind::LessThan, TokenKind::GreaterThan]
        );
    }

    #[test]
    fn test_int_literals() {
        let toks = tokenize("1 -1 1234").unwrap();
        assert!(toks.iter().all(|t| t.kind == TokenKind::IntLit));
        assert_eq!(toks[1].lexeme, "-1");
    }

    #[test]
    fn test_int_literal_requires_delimiter() {
        // `1+2` has no whitespace after the digits, so neither the
        // integer recognizer nor any other matches at position 0.
        let err = tokenize("1+2").unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidToken {
                location: SourceLocation::new(1, 1)
            }
        );
    }

    #[test]
    fn test_lone_minus_is_operator() {
        assert_eq!(kinds("-"), vec![TokenKind::Subtract]);
    }

    #[test]
    fn test_real_literals() {
        let toks = tokenize("1.0 23.5 -0.007").unwrap();
        assert!(toks.iter().all(|t| t.kind == TokenKind::RealLit));
    }

    #[test]
    fn test_real_needs_digits_both_sides() {
        assert!(tokenize("1.").is_err());
        // `.5` has no digits before the dot; nothing matches at `.`.
        assert!(tokenize(".5").is_err());
    }

    #[test]
    fn test_character_literals() {
        let toks = tokenize("'a' '\\n'").unwrap();
        assert_eq!(toks.len(), 2);
        assert!(toks.iter().all(|t| t.kind == TokenKind::CharacterLit));
        assert_eq!(toks[1].lexeme, "'\\n'");
    }

    #[test]
    fn test_unterminated_character_literal() {
        assert!(tokenize("'a").is_err());
    }

    #[test]
    fn test_string_literals() {
        let toks = tokenize("\"hello, world!\"").unwrap();
        assert_eq!(toks[0].kind, TokenKind::StringLit);
        assert_eq!(toks[0].lexeme, "\"hello, world!\"");
    }

    #[test]
    fn test_string_rejects_raw_newline() {
        assert!(tokenize("\"broken\nstring\"").is_err());
    }

    #[test]
    fn test_locations() {
        let toks = tokenize("SET x\n  TO 1").unwrap();
        assert_eq!(toks[0].location, SourceLocation::new(1, 1));
        assert_eq!(toks[1].location, SourceLocation::new(1, 5));
        assert_eq!(toks[2].location, SourceLocation::new(2, 3));
        assert_eq!(toks[3].location, SourceLocation::new(2, 6));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_strip_comments() {
        let src = "SET x TO 1 # initialise\n# whole line\nSEND x TO DISPLAY\n";
        let stripped = strip_comments(src);
        assert_eq!(stripped, "SET x TO 1 \n\nSEND x TO DISPLAY\n");
        let toks = tokenize(&stripped).unwrap();
        assert_eq!(toks.len(), 8);
        // Line numbers survive stripping.
        assert_eq!(toks[4].location.line, 3);
    }
}
