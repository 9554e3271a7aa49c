//! Scope-chain environment: frames, scopes, states and the
//! declaration resolver.

pub mod frame;
pub mod resolve;
pub mod scope;
pub mod variable;

pub use frame::{Frame, FRAME_BUCKETS};
pub use resolve::resolve;
pub use scope::{Interpreter, Scope, State};
pub use variable::Variable;
