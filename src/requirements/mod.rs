//! External tool requirements.
//!
//! The project's services depend on two external tools: `uv` for the Python
//! backend and `node` for the frontend. [`registry`] describes them,
//! [`checker`] probes for their presence, and [`installer`] performs the
//! idempotent check-then-install pass before anything is launched.

pub mod checker;
pub mod installer;
pub mod registry;

pub use installer::{default_context, ensure_tools, InstallerContext};
pub use registry::{required_tools, Tool};
