//! # Chassis — a minimal application bootstrap kit for Rust
//!
//! A string-keyed service container with provider lifecycle hooks
//! (boot, default parameters, factory), plus a thin web bootstrap layer
//! over axum.

pub use chassis_container::*;
pub use chassis_support::*;

#[cfg(feature = "web")]
pub use chassis_web as web;
