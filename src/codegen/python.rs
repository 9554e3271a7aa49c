//! Python backend.
//!
//! Emits a flat Python 3 script. Declarations become zero-value
//! assignments, SEND becomes `print`, and expressions are emitted
//! fully parenthesised.

use crate::frontend::ast::{BinaryOp, Block, Expr, Program, Stmt, VarType};
use crate::utils::pretty::CodeFormatter;

/// Emit a whole program as Python source.
pub fn emit(program: &Program) -> String {
    let mut fmt = CodeFormatter::new("    ");
    emit_block(&mut fmt, &program.body);
    fmt.finish()
}

fn emit_block(fmt: &mut CodeFormatter, block: &Block) {
    for stmt in &block.statements {
        emit_stmt(fmt, stmt);
    }
}

fn emit_stmt(fmt: &mut CodeFormatter, stmt: &Stmt) {
    match stmt {
        Stmt::VarDecl { var_type, name } => {
            fmt.writeln(&format!("{} = {}", name, zero_value(*var_type)));
        }
        Stmt::VarAssign { name, value } => {
            fmt.writeln(&format!("{} = {}", name, emit_expr(value)));
        }
        Stmt::If {
            condition,
            then_block,
            else_block,
        } => {
            fmt.writeln(&format!("if {}:", emit_expr(condition)));
            fmt.indent();
            emit_block(fmt, then_block);
            fmt.dedent();
            if let Some(else_block) = else_block {
                fmt.writeln("else:");
                fmt.indent();
                emit_block(fmt, else_block);
                fmt.dedent();
            }
        }
        Stmt::While { condition, body } => {
            fmt.writeln(&format!("while {}:", emit_expr(condition)));
            fmt.indent();
            emit_block(fmt, body);
            fmt.dedent();
        }
        Stmt::Send { value, .. } => {
            fmt.writeln(&format!("print({})", emit_expr(value)));
        }
    }
}

fn zero_value(var_type: VarType) -> &'static str {
    match var_type {
        VarType::Integer => "0",
        VarType::Real => "0.0",
        VarType::Boolean => "False",
        VarType::Character => "'\\x00'",
    }
}

fn emit_expr(expr: &Expr) -> String {
    match expr {
        Expr::Int(value) => value.to_string(),
        Expr::Var(name) => name.clone(),
        Expr::Binary { op, left, right } => {
            format!(
                "({} {} {})",
                emit_expr(left),
                python_op(*op),
                emit_expr(right)
            )
        }
    }
}

fn python_op(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Multiply => "*",
        BinaryOp::Divide => "/",
        BinaryOp::IntDiv => "//",
        BinaryOp::Modulo => "%",
        BinaryOp::Exponent => "**",
        BinaryOp::EqualTo => "==",
        BinaryOp::NotEqualTo => "!=",
        BinaryOp::GreaterThan => ">",
        BinaryOp::GreaterThanEq => ">=",
        BinaryOp::LessThan => "<",
        BinaryOp::LessThanEq => "<=",
    }
}
