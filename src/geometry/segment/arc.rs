use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::arc_from_bulge;
use crate::math::transform::{apply_delta, apply_position};
use crate::math::{cross_2d, Matrix3, Point2, Vector2, TOLERANCE};

use super::{interior_params, unit_params, Segment};

/// A circular or elliptical arc.
///
/// The parametric form is `P(θ) = center + axis_a·cos θ + axis_b·sin θ`
/// with `θ = start_angle + t·(end_angle − start_angle)`. Any affine image of
/// an arc is again an arc of this form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    axis_a: Vector2,
    axis_b: Vector2,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the underlying ellipse
    /// * `axis_a` - Offset from the center at angle 0
    /// * `axis_b` - Offset from the center at angle π/2 (must not be parallel to `axis_a`)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians; `end < start` runs clockwise
    ///
    /// # Errors
    ///
    /// Returns an error if the axes are parallel or the sweep is zero.
    pub fn new(
        center: Point2,
        axis_a: Vector2,
        axis_b: Vector2,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if cross_2d(&axis_a, &axis_b).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc axes must not be parallel".into()).into());
        }
        if (end_angle - start_angle).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be non-zero".into()).into());
        }
        Ok(Self {
            center,
            axis_a,
            axis_b,
            start_angle,
            end_angle,
        })
    }

    /// Creates a circular arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the sweep is zero.
    pub fn circular(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Self::new(
            center,
            Vector2::new(radius, 0.0),
            Vector2::new(0.0, radius),
            start_angle,
            end_angle,
        )
    }

    /// Creates a circular arc from chord endpoints and a bulge (`tan(sweep / 4)`).
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-length chord or a zero bulge.
    pub fn from_bulge(start: &Point2, end: &Point2, bulge: f64) -> Result<Self> {
        let arc = arc_from_bulge(start, end, bulge)
            .ok_or_else(|| GeometryError::Degenerate("bulge arc has no sweep".into()))?;
        Self::circular(
            arc.center,
            arc.radius,
            arc.start_angle,
            arc.start_angle + arc.sweep,
        )
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Start and end angles in radians.
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.start_angle, self.end_angle)
    }

    fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + self.sweep() * t
    }

    fn point_at_angle(&self, angle: f64) -> Point2 {
        self.center + self.axis_a * angle.cos() + self.axis_b * angle.sin()
    }

    /// Converts angles inside the sweep to parameters.
    fn angles_to_params(&self, angles: impl IntoIterator<Item = f64>) -> Vec<f64> {
        let sweep = self.sweep();
        angles
            .into_iter()
            .map(|angle| (angle - self.start_angle) / sweep)
            .collect()
    }

    /// All angles `base + k·period` within the sweep.
    fn angles_in_sweep(&self, base: f64, period: f64) -> Vec<f64> {
        let lo = self.start_angle.min(self.end_angle);
        let hi = self.start_angle.max(self.end_angle);
        let mut angle = base + ((lo - base) / period).ceil() * period;
        let mut angles = Vec::new();
        while angle <= hi + TOLERANCE {
            angles.push(angle);
            angle += period;
        }
        angles
    }
}

impl Segment for Arc {
    fn start(&self) -> Point2 {
        self.point_at_angle(self.start_angle)
    }

    fn end(&self) -> Point2 {
        self.point_at_angle(self.end_angle)
    }

    fn position_at(&self, t: f64) -> Point2 {
        self.point_at_angle(self.angle_at(t))
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let angle = self.angle_at(t);
        (self.axis_b * angle.cos() - self.axis_a * angle.sin()) * self.sweep()
    }

    fn interior_extrema_ts(&self) -> Vec<f64> {
        let mut angles = Vec::new();
        for (a, b) in [
            (self.axis_a.x, self.axis_b.x),
            (self.axis_a.y, self.axis_b.y),
        ] {
            if a.hypot(b) < TOLERANCE {
                continue;
            }
            // d/dθ (a cos θ + b sin θ) = 0 at θ = atan2(b, a) + kπ.
            angles.extend(self.angles_in_sweep(b.atan2(a), PI));
        }
        interior_params(self.angles_to_params(angles))
    }

    fn transformed(&self, matrix: &Matrix3) -> Self {
        Self {
            center: apply_position(matrix, &self.center),
            axis_a: apply_delta(matrix, &self.axis_a),
            axis_b: apply_delta(matrix, &self.axis_b),
            start_angle: self.start_angle,
            end_angle: self.end_angle,
        }
    }

    fn reversed(&self) -> Self {
        Self {
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            ..*self
        }
    }

    fn signed_area_fragment(&self) -> f64 {
        let chord = self.end() - self.start();
        0.5 * (cross_2d(&self.center.coords, &chord)
            + cross_2d(&self.axis_a, &self.axis_b) * self.sweep())
    }

    fn y_roots(&self, y: f64) -> Vec<f64> {
        let (a, b) = (self.axis_a.y, self.axis_b.y);
        let amplitude = a.hypot(b);
        if amplitude < TOLERANCE {
            return Vec::new();
        }
        // a cos θ + b sin θ = amplitude · cos(θ − phase)
        let ratio = (y - self.center.y) / amplitude;
        if ratio.abs() > 1.0 + TOLERANCE {
            return Vec::new();
        }
        let phase = b.atan2(a);
        let offset = ratio.clamp(-1.0, 1.0).acos();
        let mut angles = self.angles_in_sweep(phase + offset, TAU);
        if offset > TOLERANCE {
            angles.extend(self.angles_in_sweep(phase - offset, TAU));
        }
        unit_params(self.angles_to_params(angles))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn degenerate_arcs_rejected() {
        assert!(Arc::circular(p(0.0, 0.0), 0.0, 0.0, PI).is_err());
        assert!(Arc::circular(p(0.0, 0.0), 1.0, 1.0, 1.0).is_err());
        assert!(Arc::new(p(0.0, 0.0), Vector2::x(), Vector2::x() * 2.0, 0.0, PI).is_err());
        assert!(Arc::from_bulge(&p(0.0, 0.0), &p(1.0, 0.0), 0.0).is_err());
    }

    #[test]
    fn full_circle_fragment_is_area() {
        let circle = Arc::circular(p(3.0, -2.0), 2.0, 0.0, TAU).unwrap();
        assert_abs_diff_eq!(circle.signed_area_fragment(), 4.0 * PI, epsilon = 1e-9);
        assert_abs_diff_eq!(circle.reversed().signed_area_fragment(), -4.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn quarter_arc_extrema_and_bounds() {
        // From angle 0 to π: passes the top at π/2, no x extremum inside.
        let arc = Arc::circular(p(0.0, 0.0), 1.0, 0.0, PI).unwrap();
        let ts = arc.interior_extrema_ts();
        assert_eq!(ts.len(), 1);
        assert_abs_diff_eq!(ts[0], 0.5, epsilon = 1e-12);
        let b = arc.bounds();
        assert_abs_diff_eq!(b.bottom(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.left(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.right(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.top(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn clockwise_sweep_extrema() {
        let arc = Arc::circular(p(0.0, 0.0), 1.0, FRAC_PI_2, -FRAC_PI_2).unwrap();
        let ts = arc.interior_extrema_ts();
        assert_eq!(ts.len(), 1);
        assert_abs_diff_eq!(arc.position_at(ts[0]), p(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn bulge_semicircle_endpoints() {
        let arc = Arc::from_bulge(&p(0.0, 0.0), &p(2.0, 0.0), 1.0).unwrap();
        assert_abs_diff_eq!(arc.start(), p(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.end(), p(2.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.bounds().top(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn y_roots_on_circle() {
        let circle = Arc::circular(p(0.0, 0.0), 1.0, 0.0, TAU).unwrap();
        let ts = circle.y_roots(0.5);
        assert_eq!(ts.len(), 2, "ts={ts:?}");
        for t in ts {
            assert_abs_diff_eq!(circle.position_at(t).y, 0.5, epsilon = 1e-12);
        }
        assert!(circle.y_roots(1.5).is_empty());
    }

    #[test]
    fn affine_image_stays_on_ellipse() {
        let arc = Arc::circular(p(1.0, 1.0), 1.0, 0.0, PI).unwrap();
        let m = Matrix3::new_nonuniform_scaling(&Vector2::new(2.0, 0.5));
        let stretched = arc.transformed(&m);
        for t in [0.0, 0.3, 0.5, 1.0] {
            let q = arc.position_at(t);
            assert_abs_diff_eq!(stretched.position_at(t), p(q.x * 2.0, q.y * 0.5), epsilon = 1e-12);
        }
        // Area scales by the determinant.
        let chord_closed = |a: &Arc| {
            a.signed_area_fragment() + 0.5 * cross_2d(&a.end().coords, &a.start().coords)
        };
        assert_abs_diff_eq!(chord_closed(&stretched), chord_closed(&arc), epsilon = 1e-12);
    }
}
