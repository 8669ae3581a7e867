use crate::error::{GeometryError, Result};
use crate::math::transform::apply_position;
use crate::math::{cross_2d, Matrix3, Point2, Vector2, TOLERANCE};

use super::{unit_params, Segment};

/// A straight segment from `start` to `end`.
///
/// The parametric form is: `P(t) = start + t * (end - start)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new line segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the endpoints coincide.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { start, end })
    }

    /// Vector from start to end.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }
}

impl Segment for Line {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn position_at(&self, t: f64) -> Point2 {
        self.start + self.delta() * t
    }

    fn tangent_at(&self, _t: f64) -> Vector2 {
        self.delta()
    }

    fn interior_extrema_ts(&self) -> Vec<f64> {
        Vec::new()
    }

    fn transformed(&self, matrix: &Matrix3) -> Self {
        Self {
            start: apply_position(matrix, &self.start),
            end: apply_position(matrix, &self.end),
        }
    }

    fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    fn signed_area_fragment(&self) -> f64 {
        0.5 * cross_2d(&self.start.coords, &self.end.coords)
    }

    fn y_roots(&self, y: f64) -> Vec<f64> {
        let dy = self.end.y - self.start.y;
        if dy.abs() < TOLERANCE {
            return Vec::new();
        }
        unit_params([(y - self.start.y) / dy])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Bounds2;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn zero_length_rejected() {
        assert!(Line::new(p(1.0, 1.0), p(1.0, 1.0)).is_err());
    }

    #[test]
    fn bounds_are_endpoints() {
        let line = Line::new(p(2.0, -1.0), p(-3.0, 4.0)).unwrap();
        assert!(line.interior_extrema_ts().is_empty());
        assert_eq!(line.bounds(), Bounds2::new(-3.0, -1.0, 2.0, 4.0));
    }

    #[test]
    fn fragment_from_origin_triangle() {
        // Triangle (0,0)-(2,0)-(0,2): only the middle edge contributes.
        let line = Line::new(p(2.0, 0.0), p(0.0, 2.0)).unwrap();
        assert_abs_diff_eq!(line.signed_area_fragment(), 2.0);
        assert_abs_diff_eq!(line.reversed().signed_area_fragment(), -2.0);
    }

    #[test]
    fn y_roots_inside_and_outside() {
        let line = Line::new(p(0.0, 0.0), p(4.0, 2.0)).unwrap();
        assert_eq!(line.y_roots(1.0), vec![0.5]);
        assert!(line.y_roots(3.0).is_empty());
        let flat = Line::new(p(0.0, 1.0), p(4.0, 1.0)).unwrap();
        assert!(flat.y_roots(1.0).is_empty());
    }

    #[test]
    fn transformed_moves_endpoints() {
        let line = Line::new(p(1.0, 0.0), p(2.0, 0.0)).unwrap();
        let moved = line.transformed(&Matrix3::new_translation(&Vector2::new(0.0, 3.0)));
        assert_abs_diff_eq!(moved.start(), p(1.0, 3.0));
        assert_abs_diff_eq!(moved.position_at(0.5), p(1.5, 3.0));
    }
}
