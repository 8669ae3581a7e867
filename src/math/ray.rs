use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// A half-infinite ray with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    /// Origin of the ray.
    pub position: Point2,
    /// Unit direction of the ray.
    pub direction: Vector2,
}

impl Ray2 {
    /// Creates a ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `direction` has zero length.
    pub fn new(position: Point2, direction: Vector2) -> Result<Self> {
        let direction = direction
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector)?;
        Ok(Self {
            position,
            direction,
        })
    }

    /// Point at `distance` along the ray.
    #[must_use]
    pub fn point_at(&self, distance: f64) -> Point2 {
        self.position + self.direction * distance
    }
}
