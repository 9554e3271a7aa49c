//! Error types for the pseudocode front end.
//!
//! Every phase has its own error enum; the top-level [`PseudoError`]
//! wraps them so pipeline entry points can return a single type.

use crate::utils::location::SourceLocation;
use thiserror::Error;

/// Top-level error type for the front end.
#[derive(Error, Debug)]
pub enum PseudoError {
    /// Error during tokenisation
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Error during parsing
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error during scope resolution
    #[error("resolution error: {0}")]
    Env(#[from] EnvError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during lexical analysis.
///
/// Lexing has no recovery mode: the first invalid position aborts the
/// whole pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No recognizer matched at this position.
    #[error("invalid token at {location}")]
    InvalidToken {
        /// Where the unmatched input begins
        location: SourceLocation,
    },
}

/// Error during parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The cursor held something other than the token the grammar requires.
    #[error("expected {expected} at {location}, found {found}")]
    UnexpectedToken {
        /// Description of what the grammar required
        expected: &'static str,
        /// Description of what was actually next
        found: String,
        /// Location of the offending token
        location: SourceLocation,
    },

    /// A construct ended before a required part was seen.
    #[error("{construct} is missing {component}")]
    MissingComponent {
        /// The construct being parsed
        construct: &'static str,
        /// The part that never arrived
        component: &'static str,
    },

    /// A block parsed to zero statements.
    #[error("empty block at {location}")]
    EmptyBlock {
        /// Where the block was expected to start
        location: SourceLocation,
    },

    /// SEND named a device other than the single supported one.
    #[error("unsupported device \"{device}\" at {location} (only DISPLAY is supported)")]
    UnsupportedDevice {
        /// The device identifier that was given
        device: String,
        /// Location of the device identifier
        location: SourceLocation,
    },

    /// The expression run did not reduce to exactly one tree.
    #[error("malformed expression at {location}")]
    ExpressionMalformed {
        /// Where the expression run began
        location: SourceLocation,
    },

    /// The operand stack outgrew its capacity during reduction.
    #[error("expression exceeds the operand capacity of {capacity}")]
    OperandOverflow {
        /// The configured operand bound
        capacity: usize,
    },

    /// The leading token selected no statement kind.
    #[error("unrecognised statement starting with {found} at {location}")]
    UnrecognizedStatement {
        /// The token that failed dispatch
        found: String,
        /// Its location
        location: SourceLocation,
    },
}

/// Error in the scope-chain environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The name already exists in the active scope's own frame.
    #[error("variable \"{name}\" is already declared in this scope")]
    DuplicateDeclaration {
        /// The redeclared identifier
        name: String,
    },

    /// The name is absent from the active scope's own frame.
    #[error("variable \"{name}\" not found")]
    NotFound {
        /// The identifier that was looked up
        name: String,
    },

    /// The scope chain is shorter than the state's cursor.
    #[error("scope chain is missing a frame")]
    MissingFrame,
}

/// Result type using [`PseudoError`].
pub type PseudoResult<T> = Result<T, PseudoError>;
