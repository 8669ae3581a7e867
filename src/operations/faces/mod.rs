mod build;
mod params;
mod trace;

pub use build::{BuildFaces, Face, FaceSet};
pub use params::{FaceParams, DEFAULT_RAY_ROTATION};
pub use trace::TraceBoundaries;
