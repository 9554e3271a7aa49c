//! Token types produced by the lexer.

use crate::utils::location::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A token in the source text.
///
/// The lexeme is an owned copy of the matched substring; the token
/// sequence owns its tokens for the whole parse and the parser only
/// borrows into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The matched source text
    pub lexeme: String,
    /// Where the lexeme begins
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.lexeme)
    }
}

/// The kind of a token.
///
/// This is the full lexical vocabulary of the language. Several kinds
/// (ARRAY, STRING, CONST, REPEAT/UNTIL/TIMES, RECEIVE/FROM, READ/WRITE,
/// PROCEDURE/FUNCTION/RETURN, AND/OR/NOT, `&`) are recognised by the
/// lexer but consumed by no grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Datatype keywords
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
    /// `BOOLEAN`
    Boolean,
    /// `CHARACTER`
    Character,
    /// `ARRAY`
    Array,
    /// `STRING`
    String,

    // Attribute keywords
    /// `CONST`
    Const,

    // Statement keywords
    /// `SET`
    Set,
    /// `TO`
    To,
    /// `IF`
    If,
    /// `THEN`
    Then,
    /// `ELSE`
    Else,
    /// `END`
    End,
    /// `WHILE`
    While,
    /// `DO`
    Do,
    /// `REPEAT`
    Repeat,
    /// `UNTIL`
    Until,
    /// `TIMES`
    Times,
    /// `RECEIVE`
    Receive,
    /// `SEND`
    Send,
    /// `FROM`
    From,
    /// `READ`
    Read,
    /// `WRITE`
    Write,
    /// `PROCEDURE`
    Procedure,
    /// `FUNCTION`
    Function,
    /// `RETURN`
    Return,

    // Arithmetic operators
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `/`
    Divide,
    /// `*`
    Multiply,
    /// `^`
    Exponent,
    /// `MOD`
    Modulo,
    /// `DIV`
    IntDiv,

    // Relational operators
    /// `=`
    EqualTo,
    /// `<>`
    NotEqualTo,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEq,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEq,

    // Logical operators
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,

    // Array operator
    /// `&`
    Append,

    // Literals and names
    /// Identifier: `MyValue`, `myValue`, `My_Value`, `Counter2`
    Identifier,
    /// Integer literal: `1`, `-1`, `1234`
    IntLit,
    /// Real literal: `1.0`, `23.5`, `-0.007`
    RealLit,
    /// Character literal: `'a'`, `'\n'`
    CharacterLit,
    /// String literal: `"hello!"`
    StringLit,
}

/// The fixed keyword/operator table, keyed by literal spelling.
///
/// Matching always prefers the longest entry that prefixes the input,
/// so `<>`, `>=` and `<=` win over their one-character prefixes.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("INTEGER", TokenKind::Integer),
    ("REAL", TokenKind::Real),
    ("BOOLEAN", TokenKind::Boolean),
    ("CHARACTER", TokenKind::Character),
    ("ARRAY", TokenKind::Array),
    ("STRING", TokenKind::String),
    ("CONST", TokenKind::Const),
    ("SET", TokenKind::Set),
    ("TO", TokenKind::To),
    ("IF", TokenKind::If),
    ("THEN", TokenKind::Then),
    ("ELSE", TokenKind::Else),
    ("END", TokenKind::End),
    ("WHILE", TokenKind::While),
    ("DO", TokenKind::Do),
    ("REPEAT", TokenKind::Repeat),
    ("UNTIL", TokenKind::Until),
    ("TIMES", TokenKind::Times),
    ("RECEIVE", TokenKind::Receive),
    ("SEND", TokenKind::Send),
    ("FROM", TokenKind::From),
    ("READ", TokenKind::Read),
    ("WRITE", TokenKind::Write),
    ("PROCEDURE", TokenKind::Procedure),
    ("FUNCTION", TokenKind::Function),
    ("RETURN", TokenKind::Return),
    ("+", TokenKind::Add),
    ("-", TokenKind::Subtract),
    ("/", TokenKind::Divide),
    ("*", TokenKind::Multiply),
    ("^", TokenKind::Exponent),
    ("MOD", TokenKind::Modulo),
    ("DIV", TokenKind::IntDiv),
    ("=", TokenKind::EqualTo),
    ("<>", TokenKind::NotEqualTo),
    (">", TokenKind::GreaterThan),
    (">=", TokenKind::GreaterThanEq),
    ("<", TokenKind::LessThan),
    ("<=", TokenKind::LessThanEq),
    ("AND", TokenKind::And),
    ("OR", TokenKind::Or),
    ("NOT", TokenKind::Not),
    ("&", TokenKind::Append),
];

impl TokenKind {
    /// Check if this kind is a datatype keyword the declaration grammar
    /// accepts.
    pub fn is_var_type(&self) -> bool {
        use TokenKind::*;
        matches!(self, Integer | Real | Boolean | Character)
    }

    /// Check if this kind is an operator the expression engine accepts.
    pub fn is_expr_operator(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Add | Subtract
                | Divide
                | Multiply
                | Exponent
                | Modulo
                | IntDiv
                | EqualTo
                | NotEqualTo
                | GreaterThan
                | GreaterThanEq
                | LessThan
                | LessThanEq
        )
    }

    /// Check if this kind is a value the expression engine accepts.
    pub fn is_expr_value(&self) -> bool {
        use TokenKind::*;
        matches!(self, Identifier | IntLit)
    }

    /// Binding strength for the expression engine; `None` for
    /// non-operators. Higher binds tighter.
    pub fn precedence(&self) -> Option<u8> {
        use TokenKind::*;
        match self {
            Exponent => Some(3),
            Divide | Multiply | Modulo | IntDiv => Some(2),
            Add | Subtract => Some(1),
            EqualTo | NotEqualTo | GreaterThan | GreaterThanEq | LessThan | LessThanEq => Some(0),
            _ => None,
        }
    }

    /// A human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Identifier => "identifier",
            IntLit => "integer literal",
            RealLit => "real literal",
            CharacterLit => "character literal",
            StringLit => "string literal",
            other => {
                for (text, kind) in KEYWORDS {
                    if kind == other {
                        return text;
                    }
                }
                "token"
            }
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        assert!(TokenKind::Exponent.precedence() > TokenKind::Multiply.precedence());
        assert!(TokenKind::Multiply.precedence() > TokenKind::Add.precedence());
        assert!(TokenKind::Add.precedence() > TokenKind::LessThan.precedence());
        assert_eq!(TokenKind::Set.precedence(), None);
    }

    #[test]
    fn test_expr_token_classification() {
        assert!(TokenKind::IntLit.is_expr_value());
        assert!(TokenKind::Identifier.is_expr_value());
        assert!(TokenKind::Modulo.is_expr_operator());
        assert!(!TokenKind::Then.is_expr_operator());
        assert!(!TokenKind::RealLit.is_expr_value());
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::NotEqualTo.name(), "<>");
        assert_eq!(TokenKind::Identifier.name(), "identifier");
    }
}
