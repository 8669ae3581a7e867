use crate::math::transform::apply_position;
use crate::math::{cross_2d, Matrix3, Point2, Vector2};

use super::{interior_params, unit_params, Segment};

/// A cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    start: Point2,
    control1: Point2,
    control2: Point2,
    end: Point2,
}

impl Cubic {
    #[must_use]
    pub fn new(start: Point2, control1: Point2, control2: Point2, end: Point2) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    #[must_use]
    pub fn controls(&self) -> (Point2, Point2) {
        (self.control1, self.control2)
    }

    /// Power-basis coefficients `[c3, c2, c1, c0]` of one coordinate.
    fn power_basis(p0: f64, p1: f64, p2: f64, p3: f64) -> [f64; 4] {
        [
            -p0 + 3.0 * p1 - 3.0 * p2 + p3,
            3.0 * (p0 - 2.0 * p1 + p2),
            3.0 * (p1 - p0),
            p0,
        ]
    }
}

/// Parameters where the derivative of a 1D cubic Bézier vanishes.
fn extrema_ts(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
    // Derivative divided by 3: a t² + b t + c.
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;
    roots::find_roots_quadratic(a, b, c).as_ref().to_vec()
}

impl Segment for Cubic {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn position_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        Point2::from(
            self.start.coords * (mt * mt * mt)
                + self.control1.coords * (3.0 * mt * mt * t)
                + self.control2.coords * (3.0 * mt * t * t)
                + self.end.coords * (t * t * t),
        )
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let mt = 1.0 - t;
        (self.control1 - self.start) * (3.0 * mt * mt)
            + (self.control2 - self.control1) * (6.0 * mt * t)
            + (self.end - self.control2) * (3.0 * t * t)
    }

    fn interior_extrema_ts(&self) -> Vec<f64> {
        let xs = extrema_ts(self.start.x, self.control1.x, self.control2.x, self.end.x);
        let ys = extrema_ts(self.start.y, self.control1.y, self.control2.y, self.end.y);
        interior_params(xs.into_iter().chain(ys))
    }

    fn transformed(&self, matrix: &Matrix3) -> Self {
        Self {
            start: apply_position(matrix, &self.start),
            control1: apply_position(matrix, &self.control1),
            control2: apply_position(matrix, &self.control2),
            end: apply_position(matrix, &self.end),
        }
    }

    fn reversed(&self) -> Self {
        Self {
            start: self.end,
            control1: self.control2,
            control2: self.control1,
            end: self.start,
        }
    }

    fn signed_area_fragment(&self) -> f64 {
        let p0 = &self.start.coords;
        let p1 = &self.control1.coords;
        let p2 = &self.control2.coords;
        let p3 = &self.end.coords;
        (6.0 * cross_2d(p0, p1)
            + 3.0 * cross_2d(p0, p2)
            + cross_2d(p0, p3)
            + 3.0 * cross_2d(p1, p2)
            + 3.0 * cross_2d(p1, p3)
            + 6.0 * cross_2d(p2, p3))
            / 20.0
    }

    fn y_roots(&self, y: f64) -> Vec<f64> {
        let [c3, c2, c1, c0] =
            Self::power_basis(self.start.y, self.control1.y, self.control2.y, self.end.y);
        let roots = roots::find_roots_cubic(c3, c2, c1, c0 - y);
        unit_params(roots.as_ref().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn straight_cubic_fragment_matches_chord() {
        let c = Cubic::new(p(1.0, 0.0), p(1.0, 1.0), p(1.0, 2.0), p(1.0, 3.0));
        // 0.5 * cross((1,0), (1,3)) = 1.5
        assert_abs_diff_eq!(c.signed_area_fragment(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn symmetric_arch_has_central_extremum() {
        let c = Cubic::new(p(0.0, 0.0), p(0.0, -3.0), p(2.0, -3.0), p(2.0, 0.0));
        let ts = c.interior_extrema_ts();
        assert!(ts.iter().any(|t| (t - 0.5).abs() < 1e-9), "ts={ts:?}");
        // y(0.5) = 3 * 0.125 * -3 * 2 = -2.25
        assert_abs_diff_eq!(c.bounds().top(), -2.25, epsilon = 1e-12);
    }

    #[test]
    fn y_roots_lie_on_curve() {
        let c = Cubic::new(p(0.0, 0.0), p(1.0, 3.0), p(2.0, -3.0), p(3.0, 0.0));
        let ts = c.y_roots(0.0);
        assert_eq!(ts.len(), 3, "ts={ts:?}");
        for t in ts {
            assert_abs_diff_eq!(c.position_at(t).y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn reversed_negates_fragment() {
        let c = Cubic::new(p(0.0, 1.0), p(2.0, 3.0), p(4.0, -1.0), p(5.0, 2.0));
        assert_abs_diff_eq!(
            c.reversed().signed_area_fragment(),
            -c.signed_area_fragment(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(c.position_at(0.2), c.reversed().position_at(0.8), epsilon = 1e-12);
    }

    #[test]
    fn tangent_at_ends_points_at_controls() {
        let c = Cubic::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1.0), p(2.0, 2.0));
        assert_abs_diff_eq!(c.tangent_at(0.0), Vector2::new(3.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(c.tangent_at(1.0), Vector2::new(0.0, 3.0), epsilon = 1e-12);
    }
}
