pub mod boundary;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use boundary::{Boundary, BoundaryId, BoundaryPool};
pub use error::{PlanarError, Result};
