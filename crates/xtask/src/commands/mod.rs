//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod delve;
mod validate;

pub use delve::Delve;
pub use validate::Validate;
