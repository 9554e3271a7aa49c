//! Scope chains and interpreter state.
//!
//! A [`Scope`] owns one [`Frame`] and at most one child scope, so the
//! chain is a straight line rather than a tree. A [`State`] holds the
//! top of a chain plus a depth cursor addressing the active scope; an
//! [`Interpreter`] holds one or more states with one selected.

use crate::env::frame::Frame;
use crate::env::variable::Variable;
use crate::frontend::ast::VarType;
use crate::utils::errors::EnvError;

/// One link in a scope chain.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    /// This scope's variables
    pub frame: Frame,
    /// The nested scope, when one is open
    pub child: Option<Box<Scope>>,
}

impl Scope {
    /// Create a scope with an empty frame and no child.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A scope chain plus a cursor for the active scope.
#[derive(Debug, Clone)]
pub struct State {
    top: Scope,
    depth: usize,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Create a state whose chain is a single root scope.
    pub fn new() -> Self {
        Self {
            top: Scope::new(),
            depth: 0,
        }
    }

    /// Depth of the active scope; the root is depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The active scope.
    pub fn active_scope(&self) -> Result<&Scope, EnvError> {
        let mut scope = &self.top;
        for _ in 0..self.depth {
            scope = scope.child.as_deref().ok_or(EnvError::MissingFrame)?;
        }
        Ok(scope)
    }

    fn active_scope_mut(&mut self) -> Result<&mut Scope, EnvError> {
        let mut scope = &mut self.top;
        for _ in 0..self.depth {
            scope = scope.child.as_deref_mut().ok_or(EnvError::MissingFrame)?;
        }
        Ok(scope)
    }

    /// Open a nested scope under the active one and move the cursor
    /// into it. An existing child subtree is dropped.
    pub fn push_scope(&mut self) -> Result<(), EnvError> {
        let active = self.active_scope_mut()?;
        active.child = Some(Box::new(Scope::new()));
        self.depth += 1;
        Ok(())
    }

    /// Move the cursor back to the enclosing scope. The nested chain
    /// is left in place until the next push replaces it.
    pub fn exit_scope(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Declare a zero-initialised variable in the active frame.
    pub fn declare(&mut self, name: &str, var_type: VarType) -> Result<(), EnvError> {
        self.active_scope_mut()?
            .frame
            .insert(name, Variable::new(var_type))
    }

    /// Look a name up in the active frame only; enclosing frames are
    /// never consulted.
    pub fn lookup(&self, name: &str) -> Result<&Variable, EnvError> {
        self.active_scope()?
            .frame
            .get(name)
            .ok_or_else(|| EnvError::NotFound {
                name: name.to_string(),
            })
    }
}

/// A set of states with one selected.
#[derive(Debug, Clone)]
pub struct Interpreter {
    states: Vec<State>,
    current: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter with a single fresh state selected.
    pub fn new() -> Self {
        Self {
            states: vec![State::new()],
            current: 0,
        }
    }

    /// The selected state.
    pub fn state(&self) -> &State {
        &self.states[self.current]
    }

    /// The selected state, mutably.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.states[self.current]
    }

    /// Append a fresh state and select it.
    pub fn add_state(&mut self) -> &mut State {
        self.states.push(State::new());
        self.current = self.states.len() - 1;
        &mut self.states[self.current]
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: an interpreter owns at least one state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
