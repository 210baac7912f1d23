//! Sizing the working raster.
//!
//! Rendering never samples more than [`MAX_DIMENSION`] pixels along the
//! longer side. Resampling a larger image down to [`working_size`] is left
//! to the caller, which usually already holds an image library; the
//! renderer rejects rasters that have not been reduced.

mod size;

pub use size::{is_working_size, working_size, MAX_DIMENSION};
