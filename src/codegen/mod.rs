//! Text backends that emit a resolved program in another language.

pub mod c;
pub mod python;

use crate::frontend::ast::Program;

/// The available output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
    /// C99 source
    C,
    /// Python 3 source
    Python,
}

/// Emit a program for the given target.
pub fn compile(program: &Program, target: Target) -> String {
    match target {
        Target::C => c::emit(program),
        Target::Python => python::emit(program),
    }
}
