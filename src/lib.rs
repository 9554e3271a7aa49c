//! Front end for a structured pseudocode teaching language.
//!
//! The pipeline has four stages:
//! 1. [`frontend::lexer`] turns source text into tokens by maximal
//!    munch over six recognizers.
//! 2. [`frontend::parser`] builds an owned syntax tree by recursive
//!    descent, with a shunting-yard engine for expressions.
//! 3. [`env::resolve`] binds every declaration into a scope chain and
//!    rejects duplicates.
//! 4. [`codegen`] emits the program as C or Python text.
//!
//! ```
//! use pseudoc::compile_source;
//! use pseudoc::codegen::Target;
//!
//! let out = compile_source("SET x TO 1 + 2\nSEND x TO DISPLAY\n", Target::Python);
//! assert!(out.is_ok());
//! ```

pub mod codegen;
pub mod env;
pub mod frontend;
pub mod utils;

pub use codegen::{compile, Target};
pub use env::{resolve, Interpreter};
pub use frontend::{parse, strip_comments, tokenize, Program};
pub use utils::errors::{EnvError, LexError, ParseError, PseudoError, PseudoResult};

/// Crate version, as baked in at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the whole front end over raw source text.
///
/// Comments are stripped, the text is tokenised and parsed, and every
/// declaration is resolved. The resolved scope chain is discarded;
/// callers that want it should run [`resolve`] themselves.
pub fn process(source: &str) -> PseudoResult<Program> {
    let stripped = strip_comments(source);
    let tokens = tokenize(&stripped)?;
    let program = parse(&tokens)?;
    resolve(&program)?;
    Ok(program)
}

/// Run the front end and emit the program for a target language.
pub fn compile_source(source: &str, target: Target) -> PseudoResult<String> {
    let program = process(source)?;
    Ok(compile(&program, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_pipeline() {
        let program = process("INTEGER x # a counter\nSET x TO 1\n").unwrap();
        assert_eq!(program.body.statements.len(), 2);
    }

    #[test]
    fn test_process_surfaces_each_stage() {
        assert!(matches!(process("?"), Err(PseudoError::Lex(_))));
        assert!(matches!(process("SET TO"), Err(PseudoError::Parse(_))));
        assert!(matches!(
            process("INTEGER x\nINTEGER x\n"),
            Err(PseudoError::Env(_))
        ));
    }
}
