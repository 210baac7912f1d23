//! Public API for the dot-render crate.
//!
//! This module provides the high-level API: the [`DotRenderer`] builder,
//! the [`render`] shorthand, [`RenderParams`], and the [`RenderError`]
//! error type.

mod builder;
mod error;
mod params;

pub use builder::{render, DotRenderer};
pub use error::RenderError;
pub use params::{
    RenderParams, DEFAULT_BACKGROUND_COLOR, DEFAULT_DOT_COLOR, DEFAULT_DOT_RADIUS,
    DEFAULT_SPACING,
};
