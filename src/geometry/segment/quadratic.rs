use crate::math::transform::apply_position;
use crate::math::{cross_2d, Matrix3, Point2, Vector2, TOLERANCE};

use super::{interior_params, unit_params, Segment};

/// A quadratic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    start: Point2,
    control: Point2,
    end: Point2,
}

impl Quadratic {
    #[must_use]
    pub fn new(start: Point2, control: Point2, end: Point2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    #[must_use]
    pub fn control(&self) -> Point2 {
        self.control
    }
}

/// Root of the derivative of a 1D quadratic Bézier, if it is not constant.
fn extremum_t(p0: f64, p1: f64, p2: f64) -> Option<f64> {
    let denom = p0 - 2.0 * p1 + p2;
    if denom.abs() < TOLERANCE {
        return None;
    }
    Some((p0 - p1) / denom)
}

impl Segment for Quadratic {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn position_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        Point2::from(
            self.start.coords * (mt * mt)
                + self.control.coords * (2.0 * t * mt)
                + self.end.coords * (t * t),
        )
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        (self.control - self.start) * (2.0 * (1.0 - t)) + (self.end - self.control) * (2.0 * t)
    }

    fn interior_extrema_ts(&self) -> Vec<f64> {
        let tx = extremum_t(self.start.x, self.control.x, self.end.x);
        let ty = extremum_t(self.start.y, self.control.y, self.end.y);
        interior_params(tx.into_iter().chain(ty))
    }

    fn transformed(&self, matrix: &Matrix3) -> Self {
        Self {
            start: apply_position(matrix, &self.start),
            control: apply_position(matrix, &self.control),
            end: apply_position(matrix, &self.end),
        }
    }

    fn reversed(&self) -> Self {
        Self {
            start: self.end,
            control: self.control,
            end: self.start,
        }
    }

    fn signed_area_fragment(&self) -> f64 {
        let p0 = &self.start.coords;
        let p1 = &self.control.coords;
        let p2 = &self.end.coords;
        (2.0 * cross_2d(p0, p1) + cross_2d(p0, p2) + 2.0 * cross_2d(p1, p2)) / 6.0
    }

    fn y_roots(&self, y: f64) -> Vec<f64> {
        let (p0, p1, p2) = (self.start.y, self.control.y, self.end.y);
        let roots = roots::find_roots_quadratic(p0 - 2.0 * p1 + p2, 2.0 * (p1 - p0), p0 - y);
        unit_params(roots.as_ref().iter().copied())
    }
}
