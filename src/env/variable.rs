//! Variable storage.

use crate::frontend::ast::VarType;
use serde::{Deserialize, Serialize};

/// A declared variable and its current value.
///
/// Declaration zero-initialises the value for the declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variable {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Character(char),
}

impl Variable {
    /// The zero value for a declared type.
    pub fn new(var_type: VarType) -> Self {
        match var_type {
            VarType::Integer => Variable::Integer(0),
            VarType::Real => Variable::Real(0.0),
            VarType::Boolean => Variable::Boolean(false),
            VarType::Character => Variable::Character('\0'),
        }
    }

    /// The type this variable was declared with.
    pub fn var_type(&self) -> VarType {
        match self {
            Variable::Integer(_) => VarType::Integer,
            Variable::Real(_) => VarType::Real,
            Variable::Boolean(_) => VarType::Boolean,
            Variable::Character(_) => VarType::Character,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(Variable::new(VarType::Integer), Variable::Integer(0));
        assert_eq!(Variable::new(VarType::Real), Variable::Real(0.0));
        assert_eq!(Variable::new(VarType::Boolean), Variable::Boolean(false));
        assert_eq!(
            Variable::new(VarType::Character),
            Variable::Character('\0')
        );
    }

    #[test]
    fn test_round_trip_type() {
        for ty in [
            VarType::Integer,
            VarType::Real,
            VarType::Boolean,
            VarType::Character,
        ] {
            assert_eq!(Variable::new(ty).var_type(), ty);
        }
    }
}
