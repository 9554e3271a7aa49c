//! Expression parsing.
//!
//! Expressions are parsed in two stages. A shunting-yard pass rewrites
//! the infix token run into postfix order, then a reduction pass folds
//! the postfix sequence over a bounded operand stack into a single
//! tree. The grammar has no parentheses and every operator associates
//! to the left, `^` included, so `2 ^ 3 ^ 2` parses as `(2 ^ 3) ^ 2`.

use crate::frontend::ast::{BinaryOp, Expr};
use crate::frontend::cursor::TokenCursor;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::ParseError;
use crate::utils::location::SourceLocation;

/// Default bound on the reduction operand stack.
pub const DEFAULT_MAX_OPERANDS: usize = 256;

/// The expression engine.
#[derive(Debug, Clone)]
pub struct ExprParser {
    max_operands: usize,
}

impl Default for ExprParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprParser {
    /// Create an engine with the default operand bound.
    pub fn new() -> Self {
        Self {
            max_operands: DEFAULT_MAX_OPERANDS,
        }
    }

    /// Create an engine with a custom operand bound.
    pub fn with_max_operands(max_operands: usize) -> Self {
        Self { max_operands }
    }

    /// Parse one expression from the cursor.
    ///
    /// The engine consumes the maximal run of value and operator
    /// tokens; the first token outside that set ends the expression
    /// and is left for the caller.
    pub fn parse(&self, cursor: &mut TokenCursor<'_>) -> Result<Expr, ParseError> {
        let start = cursor.location();
        let mut run = Vec::new();
        while let Some(tok) = cursor.peek() {
            if tok.kind.is_expr_value() || tok.kind.is_expr_operator() {
                run.push(tok);
                cursor.bump();
            } else {
                break;
            }
        }
        let postfix = to_postfix(&run);
        self.reduce(&postfix, start)
    }

    /// Fold a postfix token sequence into a single tree.
    fn reduce(&self, postfix: &[&Token], start: SourceLocation) -> Result<Expr, ParseError> {
        let mut operands: Vec<Expr> = Vec::new();
        for tok in postfix {
            match BinaryOp::from_token(tok.kind) {
                Some(op) => {
                    let right = operands
                        .pop()
                        .ok_or(ParseError::ExpressionMalformed { location: start })?;
                    let left = operands
                        .pop()
                        .ok_or(ParseError::ExpressionMalformed { location: start })?;
                    operands.push(Expr::binary(op, left, right));
                }
                None => {
                    if operands.len() >= self.max_operands {
                        return Err(ParseError::OperandOverflow {
                            capacity: self.max_operands,
                        });
                    }
                    operands.push(value_expr(tok, start)?);
                }
            }
        }
        // Anything other than exactly one residual tree means the run
        // was not a well-formed expression.
        if operands.len() == 1 {
            Ok(operands.remove(0))
        } else {
            Err(ParseError::ExpressionMalformed { location: start })
        }
    }
}

/// Rewrite an infix run into postfix order.
///
/// An incoming operator pops every stacked operator of equal or higher
/// precedence before it is pushed, which is what makes every operator
/// left-associative.
fn to_postfix<'a>(run: &[&'a Token]) -> Vec<&'a Token> {
    let mut output: Vec<&Token> = Vec::with_capacity(run.len());
    let mut operators: Vec<&Token> = Vec::new();
    for tok in run {
        match tok.kind.precedence() {
            Some(prec) => {
                while let Some(&top) = operators.last() {
                    // Operator-stack entries always have a precedence.
                    let top_prec = top.kind.precedence().unwrap_or(0);
                    if top_prec >= prec {
                        operators.pop();
                        output.push(top);
                    } else {
                        break;
                    }
                }
                operators.push(tok);
            }
            None => output.push(tok),
        }
    }
    while let Some(op) = operators.pop() {
        output.push(op);
    }
    output
}

fn value_expr(tok: &Token, start: SourceLocation) -> Result<Expr, ParseError> {
    match tok.kind {
        TokenKind::IntLit => tok
            .lexeme
            .parse::<i64>()
            .map(Expr::Int)
            .map_err(|_| ParseError::ExpressionMalformed { location: start }),
        TokenKind::Identifier => Ok(Expr::Var(tok.lexeme.clone())),
        _ => Err(ParseError::ExpressionMalformed { location: start }),
    }
}
