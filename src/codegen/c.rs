//! C backend.
//!
//! Emits a single translation unit whose body is the program inside
//! `int main(void)`. Every expression is emitted fully parenthesised,
//! so no C precedence reasoning is needed.

use crate::frontend::ast::{BinaryOp, Block, Expr, Program, Stmt, VarType};
use crate::utils::pretty::CodeFormatter;

/// Emit a whole program as C source.
pub fn emit(program: &Program) -> String {
    let mut fmt = CodeFormatter::new("    ");
    fmt.writeln("#include <math.h>");
    fmt.writeln("#include <stdio.h>");
    fmt.writeln("");
    fmt.writeln("int main(void) {");
    fmt.indent();
    emit_block(&mut fmt, &program.body);
    fmt.writeln("return 0;");
    fmt.dedent();
    fmt.writeln("}");
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
            fmt.writeln(&format!("{} {};", c_type(*var_type), name));
        }
        Stmt::VarAssign { name, value } => {
            fmt.writeln(&format!("{} = {};", name, emit_expr(value)));
        }
        Stmt::If {
            condition,
            then_block,
            else_block,
        } => {
            fmt.writeln(&format!("if ({}) {{", emit_expr(condition)));
            fmt.indent();
            emit_block(fmt, then_block);
            fmt.dedent();
            if let Some(else_block) = else_block {
                fmt.writeln("} else {");
                fmt.indent();
                emit_block(fmt, else_block);
                fmt.dedent();
            }
            fmt.writeln("}");
        }
        Stmt::While { condition, body } => {
            fmt.writeln(&format!("while ({}) {{", emit_expr(condition)));
            fmt.indent();
            emit_block(fmt, body);
            fmt.dedent();
            fmt.writeln("}");
        }
        // The parser only lets the DISPLAY device through, so every
        // send is a line on stdout.
        Stmt::Send { value, .. } => {
            fmt.writeln(&format!("printf(\"%d\\n\", {});", emit_expr(value)));
        }
    }
}

fn c_type(var_type: VarType) -> &'static str {
    match var_type {
        VarType::Integer | VarType::Boolean => "int",
        VarType::Real => "float",
        VarType::Character => "char",
    }
}

fn emit_expr(expr: &Expr) -> String {
    match expr {
        Expr::Int(value) => value.to_string(),
        Expr::Var(name) => name.clone(),
        Expr::Binary { op, left, right } => {
            let left = emit_expr(left);
            let right = emit_expr(right);
            match op {
                BinaryOp::Exponent => format!("pow({left}, {right})"),
                other => format!("({left} {} {right})", c_op(*other)),
            }
        }
    }
}

fn c_op(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Multiply => "*",
        // Both divisions land on C's `/`; on int operands that is
        // integer division, which is what DIV means.
        BinaryOp::Divide | BinaryOp::IntDiv => "/",
        BinaryOp::Modulo => "%",
        BinaryOp::Exponent => "pow",
        BinaryOp::EqualTo => "==",
        BinaryOp::NotEqualTo => "!=",
        BinaryOp::GreaterThan => ">",
        BinaryOp::GreaterThanEq => ">=",
        BinaryOp::LessThan => "<",
        BinaryOp::LessThanEq => "<=",
    }
}
