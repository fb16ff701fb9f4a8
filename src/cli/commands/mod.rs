//! Command implementations.

pub mod dispatcher;
pub mod launch;
pub mod stop;
