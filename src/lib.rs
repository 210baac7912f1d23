//! Doticon - turn images into dot-pattern PNGs
//!
//! HTTP service and CLI around the `dot-render` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
