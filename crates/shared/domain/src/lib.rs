//! # Domain Models
//!
//! Pure types shared by the launchers: the client configuration.
//! Keep it lean: no I/O, no rendering.

pub mod config;
