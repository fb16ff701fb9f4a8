//! Child-process launching and teardown for the dev servers.

pub mod pidfile;
pub mod plan;
pub mod spawn;
pub mod teardown;

pub use pidfile::PidFile;
pub use plan::LaunchPlan;
pub use teardown::Teardown;
