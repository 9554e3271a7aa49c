//! Front end: lexing, token cursor, expression engine and statement
//! parser.

pub mod ast;
pub mod cursor;
pub mod dump;
pub mod expr;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{BinaryOp, Block, Expr, Program, Stmt, VarType};
pub use cursor::TokenCursor;
pub use expr::ExprParser;
pub use lexer::{strip_comments, tokenize};
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};
