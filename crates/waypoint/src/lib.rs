//! Facade crate for the Waypoint client.
//! Re-exports the shared crates so launchers depend on a single entry point.
//! Keep this crate thin: it composes other crates, it does not implement behaviour.

pub use waypoint_domain as domain;
pub use waypoint_kernel as kernel;
pub use waypoint_ui as ui;
