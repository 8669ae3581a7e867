use crate::error::{GeometryError, Result};

use super::{Matrix3, Point2, Vector2};

/// An invertible 2D affine transform with its inverse cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    matrix: Matrix3,
    inverse: Matrix3,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2 {
    /// Creates a transform from a homogeneous 3x3 matrix.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the matrix is not invertible.
    pub fn new(matrix: Matrix3) -> Result<Self> {
        let inverse = matrix
            .try_inverse()
            .ok_or_else(|| GeometryError::Degenerate("transform is not invertible".into()))?;
        Ok(Self { matrix, inverse })
    }

    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
            inverse: Matrix3::identity(),
        }
    }

    /// Counter-clockwise rotation about the origin.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        Self {
            matrix: Matrix3::new_rotation(angle),
            inverse: Matrix3::new_rotation(-angle),
        }
    }

    #[must_use]
    pub fn translation(offset: Vector2) -> Self {
        Self {
            matrix: Matrix3::new_translation(&offset),
            inverse: Matrix3::new_translation(&-offset),
        }
    }

    /// Non-uniform scaling about the origin.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if either factor is zero.
    pub fn scaling(sx: f64, sy: f64) -> Result<Self> {
        Self::new(Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)))
    }

    /// Returns the forward matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Returns the inverse matrix.
    #[must_use]
    pub fn inverse_matrix(&self) -> &Matrix3 {
        &self.inverse
    }

    #[must_use]
    pub fn transform_position(&self, point: &Point2) -> Point2 {
        apply_position(&self.matrix, point)
    }

    #[must_use]
    pub fn transform_delta(&self, delta: &Vector2) -> Vector2 {
        apply_delta(&self.matrix, delta)
    }

    #[must_use]
    pub fn inverse_position(&self, point: &Point2) -> Point2 {
        apply_position(&self.inverse, point)
    }

    #[must_use]
    pub fn inverse_delta(&self, delta: &Vector2) -> Vector2 {
        apply_delta(&self.inverse, delta)
    }
}

/// Transforms a point by a homogeneous matrix.
#[must_use]
pub fn apply_position(matrix: &Matrix3, point: &Point2) -> Point2 {
    let v = matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
    Point2::new(v.x, v.y)
}

/// Transforms a vector by a homogeneous matrix (ignoring translation).
#[must_use]
pub fn apply_delta(matrix: &Matrix3, delta: &Vector2) -> Vector2 {
    let v = matrix * nalgebra::Vector3::new(delta.x, delta.y, 0.0);
    Vector2::new(v.x, v.y)
}
