//! Kernel utilities shared by the launchers.
//! Keep this crate lightweight; today it only hosts layered config loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use waypoint_kernel::config::load_client_config;
//!
//! let cfg = load_client_config(Some("client.toml")).unwrap_or_default();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use waypoint_domain as domain;
