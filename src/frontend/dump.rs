//! Debug dumps of the token sequence and the syntax tree.
//!
//! Both dumps are brace-delimited, indentation-nested text intended
//! for eyeballing front-end output, not for machine consumption.

use crate::frontend::ast::{Block, Expr, Program, Stmt};
use crate::frontend::token::Token;
use crate::utils::pretty::CodeFormatter;

/// Render a token sequence, one token per line.
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut fmt = CodeFormatter::default_indent();
    fmt.writeln("tokens {");
    fmt.indent();
    for tok in tokens {
        fmt.writeln(&format!(
            "{:?} {:?} @ {}:{}",
            tok.kind, tok.lexeme, tok.location.line, tok.location.column
        ));
    }
    fmt.dedent();
    fmt.writeln("}");
    fmt.finish()
}

/// Render a syntax tree.
pub fn dump_program(program: &Program) -> String {
    let mut fmt = CodeFormatter::default_indent();
    fmt.writeln("program {");
    fmt.indent();
    dump_block(&mut fmt, &program.body);
    fmt.dedent();
    fmt.writeln("}");
    fmt.finish()
}

fn dump_block(fmt: &mut CodeFormatter, block: &Block) {
    for stmt in &block.statements {
        dump_stmt(fmt, stmt);
    }
}

fn dump_stmt(fmt: &mut CodeFormatter, stmt: &Stmt) {
    match stmt {
        Stmt::VarDecl { var_type, name } => {
            fmt.writeln(&format!("declare {{ {var_type} {name} }}"));
        }
        Stmt::VarAssign { name, value } => {
            fmt.writeln(&format!("assign {{ {name} <- {} }}", dump_expr(value)));
        }
        Stmt::If {
            condition,
            then_block,
            else_block,
        } => {
            fmt.writeln(&format!("if {{ {}", dump_expr(condition)));
            fmt.indent();
            fmt.writeln("then {");
            fmt.indent();
            dump_block(fmt, then_block);
            fmt.dedent();
            fmt.writeln("}");
            if let Some(else_block) = else_block {
                fmt.writeln("else {");
                fmt.indent();
                dump_block(fmt, else_block);
                fmt.dedent();
                fmt.writeln("}");
            }
            fmt.dedent();
            fmt.writeln("}");
        }
        Stmt::While { condition, body } => {
            fmt.writeln(&format!("while {{ {}", dump_expr(condition)));
            fmt.indent();
            fmt.writeln("do {");
            fmt.indent();
            dump_block(fmt, body);
            fmt.dedent();
            fmt.writeln("}");
            fmt.dedent();
            fmt.writeln("}");
        }
        Stmt::Send { value, device } => {
            fmt.writeln(&format!("send {{ {} -> {device} }}", dump_expr(value)));
        }
    }
}

fn dump_expr(expr: &Expr) -> String {
    match expr {
        Expr::Int(value) => value.to_string(),
        Expr::Var(name) => name.clone(),
        Expr::Binary { op, left, right } => {
            format!("({} {} {})", dump_expr(left), op, dump_expr(right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::tokenize;
    use crate::frontend::parser::parse;
    use indoc::indoc;

    #[test]
    fn test_dump_tokens() {
        let toks = tokenize("SET x TO 1").unwrap();
        let out = dump_tokens(&toks);
        assert!(out.starts_with("tokens {\n"));
        assert!(out.contains("Set \"SET\" @ 1:1"));
        assert!(out.contains("IntLit \"1\" @ 1:10"));
    }

    #[test]
    fn test_dump_program() {
        let toks = tokenize(indoc! {"
            INTEGER x
            SET x TO 1 + 2 * 3
            IF x > 0 THEN
                SEND x TO DISPLAY
            END IF
        "})
        .unwrap();
        let program = parse(&toks).unwrap();
        let out = dump_program(&program);
        assert!(out.contains("declare { INTEGER x }"));
        assert!(out.contains("assign { x <- (1 + (2 * 3)) }"));
        assert!(out.contains("if { (x > 0)"));
        assert!(out.contains("send { x -> DISPLAY }"));
    }
}
