//! Statement parsing.
//!
//! A recursive-descent parser over a [`TokenCursor`]. Each statement
//! kind is selected by its leading token; blocks are parsed up to a
//! terminator set supplied by the enclosing construct, and only the
//! top-level block may run to the end of the input.

use crate::frontend::ast::{Block, Program, Stmt, VarType};
use crate::frontend::cursor::TokenCursor;
use crate::frontend::expr::ExprParser;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::ParseError;

/// The only output device SEND accepts.
const DISPLAY_DEVICE: &str = "DISPLAY";

/// The statement parser.
#[derive(Debug, Default)]
pub struct Parser {
    expr: ExprParser,
}

/// Parse a token sequence into a program.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new().parse_program(tokens)
}

impl Parser {
    /// Create a parser with the default expression engine.
    pub fn new() -> Self {
        Self {
            expr: ExprParser::new(),
        }
    }

    /// Create a parser with a specific expression engine.
    pub fn with_expr_parser(expr: ExprParser) -> Self {
        Self { expr }
    }

    /// Parse a whole token sequence as one program.
    pub fn parse_program(&self, tokens: &[Token]) -> Result<Program, ParseError> {
        let mut cursor = TokenCursor::new(tokens);
        let body = self.parse_block_until(&mut cursor, &[], "program")?;
        log::debug!("parsed {} top-level statements", body.statements.len());
        Ok(Program { body })
    }

    /// Parse statements until a terminator token is next.
    ///
    /// With an empty terminator set the block runs to the end of the
    /// input; otherwise running out of tokens before a terminator is
    /// an error. The terminator itself is left on the cursor. A block
    /// with no statements is rejected.
    fn parse_block_until(
        &self,
        cursor: &mut TokenCursor<'_>,
        terminators: &[TokenKind],
        construct: &'static str,
    ) -> Result<Block, ParseError> {
        let start = cursor.location();
        let mut statements = Vec::new();
        loop {
            match cursor.peek() {
                Some(tok) if terminators.contains(&tok.kind) => break,
                Some(_) => statements.push(self.parse_statement(cursor)?),
                None if terminators.is_empty() => break,
                None => {
                    return Err(ParseError::MissingComponent {
                        construct,
                        component: "END",
                    })
                }
            }
        }
        if statements.is_empty() {
            return Err(ParseError::EmptyBlock { location: start });
        }
        Ok(Block { statements })
    }

    /// Parse one statement, dispatching on the leading token.
    pub fn parse_statement(&self, cursor: &mut TokenCursor<'_>) -> Result<Stmt, ParseError> {
        let tok = cursor.peek().ok_or(ParseError::UnexpectedToken {
            expected: "statement",
            found: "end of input".to_string(),
            location: cursor.location(),
        })?;
        match tok.kind {
            kind if kind.is_var_type() => self.parse_var_decl(cursor),
            TokenKind::Set => self.parse_var_assign(cursor),
            TokenKind::If => self.parse_if(cursor),
            TokenKind::While => self.parse_while(cursor),
            TokenKind::Send => self.parse_send(cursor),
            _ => Err(ParseError::UnrecognizedStatement {
                found: tok.lexeme.clone(),
                location: tok.location,
            }),
        }
    }

    /// `INTEGER name` (or REAL / BOOLEAN / CHARACTER)
    fn parse_var_decl(&self, cursor: &mut TokenCursor<'_>) -> Result<Stmt, ParseError> {
        let type_tok = cursor.expect(
            &[
                TokenKind::Integer,
                TokenKind::Real,
                TokenKind::Boolean,
                TokenKind::Character,
            ],
            "datatype keyword",
        )?;
        // The expect above only passes datatype kinds through.
        let var_type = VarType::from_token(type_tok.kind).ok_or(ParseError::UnexpectedToken {
            expected: "datatype keyword",
            found: type_tok.lexeme.clone(),
            location: type_tok.location,
        })?;
        let name = cursor.expect(&[TokenKind::Identifier], "identifier")?;
        Ok(Stmt::VarDecl {
            var_type,
            name: name.lexeme.clone(),
        })
    }

    /// `SET name TO expr`
    fn parse_var_assign(&self, cursor: &mut TokenCursor<'_>) -> Result<Stmt, ParseError> {
        cursor.expect(&[TokenKind::Set], "SET")?;
        let name = cursor.expect(&[TokenKind::Identifier], "identifier")?;
        cursor.expect(&[TokenKind::To], "TO")?;
        let value = self.expr.parse(cursor)?;
        Ok(Stmt::VarAssign {
            name: name.lexeme.clone(),
            value,
        })
    }

    /// `IF cond THEN block [ELSE block] END IF`
    fn parse_if(&self, cursor: &mut TokenCursor<'_>) -> Result<Stmt, ParseError> {
        cursor.expect(&[TokenKind::If], "IF")?;
        let condition = self.expr.parse(cursor)?;
        cursor.expect(&[TokenKind::Then], "THEN")?;
        let then_block =
            self.parse_block_until(cursor, &[TokenKind::Else, TokenKind::End], "IF statement")?;
        let else_block = match cursor.peek() {
            Some(tok) if tok.kind == TokenKind::Else => {
                cursor.bump();
                Some(self.parse_block_until(cursor, &[TokenKind::End], "ELSE arm")?)
            }
            _ => None,
        };
        cursor.expect(&[TokenKind::End], "END")?;
        cursor.expect(&[TokenKind::If], "IF")?;
        Ok(Stmt::If {
            condition,
            then_block,
            else_block,
        })
    }

    /// `WHILE cond DO block END WHILE`
    fn parse_while(&self, cursor: &mut TokenCursor<'_>) -> Result<Stmt, ParseError> {
        cursor.expect(&[TokenKind::While], "WHILE")?;
        let condition = self.expr.parse(cursor)?;
        cursor.expect(&[TokenKind::Do], "DO")?;
        let body = self.parse_block_until(cursor, &[TokenKind::End], "WHILE statement")?;
        cursor.expect(&[TokenKind::End], "END")?;
        cursor.expect(&[TokenKind::While], "WHILE")?;
        Ok(Stmt::While { condition, body })
    }

    /// `SEND expr TO DISPLAY`
    fn parse_send(&self, cursor: &mut TokenCursor<'_>) -> Result<Stmt, ParseError> {
        cursor.expect(&[TokenKind::Send], "SEND")?;
        let value = self.expr.parse(cursor)?;
        cursor.expect(&[TokenKind::To], "TO")?;
        let device = cursor.expect(&[TokenKind::Identifier], "device identifier")?;
        if device.lexeme != DISPLAY_DEVICE {
            return Err(ParseError::UnsupportedDevice {
                device: device.lexeme.clone(),
                location: device.location,
            });
        }
        Ok(Stmt::Send {
            value,
            device: device.lexeme.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::{BinaryOp, Expr};
    use crate::frontend::lexer::tokenize;
    use indoc::indoc;

    fn parse_source(source: &str) -> Result<Program, ParseError> {
        parse(&tokenize(source).expect("tokenise failed"))
    }

    #[test]
    fn test_var_decl() {
        let program = parse_source("INTEGER counter").unwrap();
        assert_eq!(
            program.body.statements,
            vec![Stmt::VarDecl {
                var_type: VarType::Integer,
                name: "counter".to_string(),
            }]
        );
    }

    #[test]
    fn test_var_assign() {
        let program = parse_source("SET x TO 1 + 2").unwrap();
        assert_eq!(
            program.body.statements,
            vec![Stmt::VarAssign {
                name: "x".to_string(),
                value: Expr::binary(BinaryOp::Add, Expr::Int(1), Expr::Int(2)),
            }]
        );
    }

    #[test]
    fn test_if_without_else() {
        let program = parse_source(indoc! {"
            IF x > 0 THEN
                SEND x TO DISPLAY
            END IF
        "})
        .unwrap();
        match &program.body.statements[0] {
            Stmt::If {
                then_block,
                else_block,
                ..
            } => {
                assert_eq!(then_block.statements.len(), 1);
                assert!(else_block.is_none());
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn test_if_with_else() {
        let program = parse_source(indoc! {"
            IF x = 0 THEN
                SET y TO 1
            ELSE
                SET y TO 2
                SEND y TO DISPLAY
            END IF
        "})
        .unwrap();
        match &program.body.statements[0] {
            Stmt::If { else_block, .. } => {
                assert_eq!(else_block.as_ref().unwrap().statements.len(), 2);
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn test_while() {
        let program = parse_source(indoc! {"
            WHILE i < 10 DO
                SET i TO i + 1
            END WHILE
        "})
        .unwrap();
        match &program.body.statements[0] {
            Stmt::While { condition, body } => {
                assert!(matches!(
                    condition,
                    Expr::Binary {
                        op: BinaryOp::LessThan,
                        ..
                    }
                ));
                assert_eq!(body.statements.len(), 1);
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn test_nested_blocks() {
        let program = parse_source(indoc! {"
            WHILE i < 10 DO
                IF i MOD 2 = 0 THEN
                    SEND i TO DISPLAY
                END IF
                SET i TO i + 1
            END WHILE
        "})
        .unwrap();
        match &program.body.statements[0] {
            Stmt::While { body, .. } => assert_eq!(body.statements.len(), 2),
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_device() {
        let err = parse_source("SEND x TO PRINTER").unwrap_err();
        match err {
            ParseError::UnsupportedDevice { device, .. } => assert_eq!(device, "PRINTER"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_then_block() {
        let err = parse_source(indoc! {"
            IF x > 0 THEN
            END IF
        "})
        .unwrap_err();
        assert!(matches!(err, ParseError::EmptyBlock { .. }));
    }

    #[test]
    fn test_empty_program() {
        let err = parse_source("").unwrap_err();
        assert!(matches!(err, ParseError::EmptyBlock { .. }));
    }

    #[test]
    fn test_unterminated_while() {
        let err = parse_source("WHILE i < 10 DO SET i TO 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingComponent {
                construct: "WHILE statement",
                component: "END",
            }
        );
    }

    #[test]
    fn test_unrecognized_statement() {
        let err = parse_source("REPEAT 3 TIMES").unwrap_err();
        match err {
            ParseError::UnrecognizedStatement { found, .. } => assert_eq!(found, "REPEAT"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_trailing_junk_after_end() {
        // END with nothing following inside the top-level block is an
        // unrecognised statement, not a crash.
        let err = parse_source("SET x TO 1 END").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedStatement { .. }));
    }
}
