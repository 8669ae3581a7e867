pub mod segment;
pub mod subpath;

pub use segment::{Arc, Cubic, Line, PathSegment, Quadratic, RayHit, Segment};
pub use subpath::Subpath;
