//! Command execution module
//!
//! One primitive, several call patterns:
//! - Captured execution through a shell, blocking or async
//! - Boolean success checks
//! - Exit-on-failure wrappers
//! - Forwarding execution without a shell

pub mod forward;
pub mod runner;
pub mod terminate;

pub use forward::*;
pub use runner::*;
pub use terminate::*;
