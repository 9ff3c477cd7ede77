//! Pure face geometry for MUG.
//!
//! Converts a handful of continuous [`FaceParameters`] plus a bounding
//! [`Rect`] into the vector paths of a cartoon face: skull, eyes, eyebrows
//! and mouth. Nothing here allocates state between calls, so the same inputs
//! always produce the same [`FacePaths`].
//!
//! # Quick start
//!
//! ```
//! use mug_geometry::{compute_paths, FaceParameters, Rect};
//!
//! let params = FaceParameters::default();
//! let paths = compute_paths(&params, Rect::new(0.0, 0.0, 200.0, 200.0));
//! assert_eq!(paths.iter().count(), 6);
//! ```

mod face;
mod path;
mod point;

pub use face::{
    compute_paths, effective_curvature, effective_tilt, FaceMetrics, FaceParameters, FacePaths,
    Rgb, Side,
};
pub use path::Path;
pub use point::{Point, Rect};
