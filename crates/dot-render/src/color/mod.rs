//! Color values and hex parsing.
//!
//! All colors in the renderer are plain 8-bit sRGB triples. Brightness is
//! estimated with Rec. 709 luma weights applied directly to the 8-bit
//! channel values, without gamma decoding.

mod error;
mod rgb;

pub use error::{ColorErrorKind, ParseColorError};
pub use rgb::{Rgb, LUMA_WEIGHTS};
