//! Abstract syntax tree for the pseudocode language.
//!
//! The tree is fully owned: statements own their blocks and
//! expressions own their subtrees, so dropping a [`Program`] frees
//! everything beneath it.

use crate::frontend::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole translation unit: one top-level block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// The statements of the program
    pub body: Block,
}

/// A non-empty sequence of statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// The statements in source order
    pub statements: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `INTEGER x` — declare a variable in the active scope
    VarDecl {
        /// The declared type
        var_type: VarType,
        /// The declared name
        name: String,
    },
    /// `SET x TO expr`
    VarAssign {
        /// The assigned name
        name: String,
        /// The value expression
        value: Expr,
    },
    /// `IF cond THEN ... END IF` / `IF cond THEN ... ELSE ... END IF`
    If {
        /// The branch condition
        condition: Expr,
        /// Statements run when the condition holds
        then_block: Block,
        /// Statements run otherwise, if an ELSE arm was given
        else_block: Option<Block>,
    },
    /// `WHILE cond DO ... END WHILE`
    While {
        /// The loop condition
        condition: Expr,
        /// The loop body
        body: Block,
    },
    /// `SEND expr TO DISPLAY`
    Send {
        /// The value to emit
        value: Expr,
        /// The named output device; only `DISPLAY` passes the parser
        device: String,
    },
}

/// The declarable datatypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarType {
    Integer,
    Real,
    Boolean,
    Character,
}

impl VarType {
    /// Map a datatype keyword to its type, if it is one.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Integer => Some(VarType::Integer),
            TokenKind::Real => Some(VarType::Real),
            TokenKind::Boolean => Some(VarType::Boolean),
            TokenKind::Character => Some(VarType::Character),
            _ => None,
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VarType::Integer => "INTEGER",
            VarType::Real => "REAL",
            VarType::Boolean => "BOOLEAN",
            VarType::Character => "CHARACTER",
        };
        write!(f, "{name}")
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// An integer literal
    Int(i64),
    /// A variable reference
    Var(String),
    /// A binary operation
    Binary {
        /// The operator
        op: BinaryOp,
        /// Left operand
        left: Box<Expr>,
        /// Right operand
        right: Box<Expr>,
    },
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
    Modulo,
    IntDiv,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanEq,
    LessThan,
    LessThanEq,
}

impl BinaryOp {
    /// Map an operator token to its operator, if it is one.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(BinaryOp::Add),
            TokenKind::Subtract => Some(BinaryOp::Subtract),
            TokenKind::Multiply => Some(BinaryOp::Multiply),
            TokenKind::Divide => Some(BinaryOp::Divide),
            TokenKind::Exponent => Some(BinaryOp::Exponent),
            TokenKind::Modulo => Some(BinaryOp::Modulo),
            TokenKind::IntDiv => Some(BinaryOp::IntDiv),
            TokenKind::EqualTo => Some(BinaryOp::EqualTo),
            TokenKind::NotEqualTo => Some(BinaryOp::NotEqualTo),
            TokenKind::GreaterThan => Some(BinaryOp::GreaterThan),
            TokenKind::GreaterThanEq => Some(BinaryOp::GreaterThanEq),
            TokenKind::LessThan => Some(BinaryOp::LessThan),
            TokenKind::LessThanEq => Some(BinaryOp::LessThanEq),
            _ => None,
        }
    }

    /// The operator's surface spelling.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Exponent => "^",
            BinaryOp::Modulo => "MOD",
            BinaryOp::IntDiv => "DIV",
            BinaryOp::EqualTo => "=",
            BinaryOp::NotEqualTo => "<>",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanEq => ">=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanEq => "<=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Expr {
    /// Convenience constructor for a binary node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_mapping_covers_expression_operators() {
        for kind in [
            TokenKind::Add,
            TokenKind::Subtract,
            TokenKind::Multiply,
            TokenKind::Divide,
            TokenKind::Exponent,
            TokenKind::Modulo,
            TokenKind::IntDiv,
            TokenKind::EqualTo,
            TokenKind::NotEqualTo,
            TokenKind::GreaterThan,
            TokenKind::GreaterThanEq,
            TokenKind::LessThan,
            TokenKind::LessThanEq,
        ] {
            assert!(BinaryOp::from_token(kind).is_some(), "{kind:?}");
        }
        assert_eq!(BinaryOp::from_token(TokenKind::Set), None);
    }

    #[test]
    fn test_var_type_mapping() {
        assert_eq!(
            VarType::from_token(TokenKind::Integer),
            Some(VarType::Integer)
        );
        assert_eq!(VarType::from_token(TokenKind::Array), None);
    }
}
