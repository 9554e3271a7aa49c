//! Declaration resolution over a parsed program.
//!
//! The resolver walks the tree, opening a scope for every block and
//! binding every declaration into the active frame, so duplicate
//! declarations surface before any backend runs. Variable uses are
//! not checked; only declarations are resolved.

use crate::env::scope::{Interpreter, State};
use crate::frontend::ast::{Block, Program, Stmt};
use crate::utils::errors::EnvError;

/// Resolve every declaration in a program.
///
/// On success the returned interpreter's selected state holds the
/// fully populated scope chain of the last block visited at each
/// depth.
pub fn resolve(program: &Program) -> Result<Interpreter, EnvError> {
    let mut interp = Interpreter::new();
    resolve_block(interp.state_mut(), &program.body)?;
    log::debug!("resolved program to depth {}", interp.state().depth());
    Ok(interp)
}

fn resolve_block(state: &mut State, block: &Block) -> Result<(), EnvError> {
    state.push_scope()?;
    for stmt in &block.statements {
        match stmt {
            Stmt::VarDecl { var_type, name } => state.declare(name, *var_type)?,
            Stmt::If {
                then_block,
                else_block,
                ..
            } => {
                resolve_block(state, then_block)?;
                if let Some(else_block) = else_block {
                    resolve_block(state, else_block)?;
                }
            }
            Stmt::While { body, .. } => resolve_block(state, body)?,
            Stmt::VarAssign { .. } | Stmt::Send { .. } => {}
        }
    }
    state.exit_scope();
    Ok(())
}
