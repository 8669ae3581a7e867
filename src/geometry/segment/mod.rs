mod arc;
mod cubic;
mod line;
mod quadratic;

pub use arc::Arc;
pub use cubic::Cubic;
pub use line::Line;
pub use quadratic::Quadratic;

use crate::math::{Bounds2, Matrix3, Point2, Ray2, Vector2, TOLERANCE};

/// Slack allowed when deciding whether a curve parameter lies in `[0, 1]`.
pub const PARAM_TOLERANCE: f64 = 1e-9;

/// A forward intersection of a ray with a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin along its unit direction.
    pub distance: f64,
    /// The intersection point.
    pub point: Point2,
    /// Segment parameter of the intersection.
    pub t: f64,
    /// `+1` if the ray origin lies on the left of the segment at the hit,
    /// `-1` if it lies on the right.
    pub wind: i8,
}

/// Trait for parametric planar segments with `t` in `[0, 1]`.
pub trait Segment {
    /// Point at `t = 0`.
    fn start(&self) -> Point2;

    /// Point at `t = 1`.
    fn end(&self) -> Point2;

    /// Evaluates the segment at parameter `t`.
    fn position_at(&self, t: f64) -> Point2;

    /// First derivative with respect to `t` (not normalized).
    fn tangent_at(&self, t: f64) -> Vector2;

    /// Sorted parameters in `(0, 1)` where the x or y derivative vanishes.
    fn interior_extrema_ts(&self) -> Vec<f64>;

    /// Image of the segment under an affine homogeneous matrix.
    #[must_use]
    fn transformed(&self, matrix: &Matrix3) -> Self
    where
        Self: Sized;

    /// The same curve traversed from end to start.
    #[must_use]
    fn reversed(&self) -> Self
    where
        Self: Sized;

    /// Closed-form `½∫(x dy − y dx)` along the segment.
    ///
    /// Summed over a closed loop this is the enclosed signed area, positive
    /// for counter-clockwise traversal.
    fn signed_area_fragment(&self) -> f64;

    /// Parameters in `[0, 1]` where the segment meets the horizontal line at `y`.
    fn y_roots(&self, y: f64) -> Vec<f64>;

    /// Tight bounds: the endpoints plus every interior extremum.
    fn bounds(&self) -> Bounds2 {
        let mut bounds = Bounds2::from_points(&self.start(), &self.end());
        for t in self.interior_extrema_ts() {
            bounds = bounds.include_point(&self.position_at(t));
        }
        bounds
    }

    /// Intersections with `ray` strictly in front of its origin, nearest first.
    ///
    /// Tangential touches are not reported.
    fn ray_intersections(&self, ray: &Ray2) -> Vec<RayHit>
    where
        Self: Sized,
    {
        let local = self.transformed(&ray_frame(ray));
        let mut hits: Vec<RayHit> = local
            .y_roots(0.0)
            .into_iter()
            .filter_map(|t| {
                let p = local.position_at(t);
                if p.x <= TOLERANCE {
                    return None;
                }
                let tangent = local.tangent_at(t);
                if tangent.y.abs() < TOLERANCE {
                    return None;
                }
                Some(RayHit {
                    distance: p.x,
                    point: ray.point_at(p.x),
                    t,
                    wind: if tangent.y > 0.0 { 1 } else { -1 },
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// Rigid transform taking the ray origin to `(0, 0)` and its direction to `+x`.
fn ray_frame(ray: &Ray2) -> Matrix3 {
    let d = ray.direction;
    let o = ray.position;
    Matrix3::new(
        d.x,
        d.y,
        -(d.x * o.x + d.y * o.y),
        -d.y,
        d.x,
        d.y * o.x - d.x * o.y,
        0.0,
        0.0,
        1.0,
    )
}

/// Keeps parameters within `[0, 1]` (with slack), clamped, sorted and deduplicated.
pub(crate) fn unit_params(ts: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = ts
        .into_iter()
        .filter(|t| *t >= -PARAM_TOLERANCE && *t <= 1.0 + PARAM_TOLERANCE)
        .map(|t| t.clamp(0.0, 1.0))
        .collect();
    out.sort_by(f64::total_cmp);
    out.dedup_by(|a, b| (*a - *b).abs() < PARAM_TOLERANCE);
    out
}

/// Keeps parameters strictly inside `(0, 1)`, sorted and deduplicated.
pub(crate) fn interior_params(ts: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = ts
        .into_iter()
        .filter(|t| *t > PARAM_TOLERANCE && *t < 1.0 - PARAM_TOLERANCE)
        .collect();
    out.sort_by(f64::total_cmp);
    out.dedup_by(|a, b| (*a - *b).abs() < PARAM_TOLERANCE);
    out
}

/// A segment of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// A straight line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quadratic(Quadratic),
    /// A cubic Bézier segment.
    Cubic(Cubic),
    /// A circular or elliptical arc.
    Arc(Arc),
}

impl From<Line> for PathSegment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Quadratic> for PathSegment {
    fn from(quadratic: Quadratic) -> Self {
        Self::Quadratic(quadratic)
    }
}

impl From<Cubic> for PathSegment {
    fn from(cubic: Cubic) -> Self {
        Self::Cubic(cubic)
    }
}

impl From<Arc> for PathSegment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl Segment for PathSegment {
    fn start(&self) -> Point2 {
        match self {
            Self::Line(s) => s.start(),
            Self::Quadratic(s) => s.start(),
            Self::Cubic(s) => s.start(),
            Self::Arc(s) => s.start(),
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Line(s) => s.end(),
            Self::Quadratic(s) => s.end(),
            Self::Cubic(s) => s.end(),
            Self::Arc(s) => s.end(),
        }
    }

    fn position_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line(s) => s.position_at(t),
            Self::Quadratic(s) => s.position_at(t),
            Self::Cubic(s) => s.position_at(t),
            Self::Arc(s) => s.position_at(t),
        }
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        match self {
            Self::Line(s) => s.tangent_at(t),
            Self::Quadratic(s) => s.tangent_at(t),
            Self::Cubic(s) => s.tangent_at(t),
            Self::Arc(s) => s.tangent_at(t),
        }
    }

    fn interior_extrema_ts(&self) -> Vec<f64> {
        match self {
            Self::Line(s) => s.interior_extrema_ts(),
            Self::Quadratic(s) => s.interior_extrema_ts(),
            Self::Cubic(s) => s.interior_extrema_ts(),
            Self::Arc(s) => s.interior_extrema_ts(),
        }
    }

    fn transformed(&self, matrix: &Matrix3) -> Self {
        match self {
            Self::Line(s) => Self::Line(s.transformed(matrix)),
            Self::Quadratic(s) => Self::Quadratic(s.transformed(matrix)),
            Self::Cubic(s) => Self::Cubic(s.transformed(matrix)),
            Self::Arc(s) => Self::Arc(s.transformed(matrix)),
        }
    }

    fn reversed(&self) -> Self {
        match self {
            Self::Line(s) => Self::Line(s.reversed()),
            Self::Quadratic(s) => Self::Quadratic(s.reversed()),
            Self::Cubic(s) => Self::Cubic(s.reversed()),
            Self::Arc(s) => Self::Arc(s.reversed()),
        }
    }

    fn signed_area_fragment(&self) -> f64 {
        match self {
            Self::Line(s) => s.signed_area_fragment(),
            Self::Quadratic(s) => s.signed_area_fragment(),
            Self::Cubic(s) => s.signed_area_fragment(),
            Self::Arc(s) => s.signed_area_fragment(),
        }
    }

    fn y_roots(&self, y: f64) -> Vec<f64> {
        match self {
            Self::Line(s) => s.y_roots(y),
            Self::Quadratic(s) => s.y_roots(y),
            Self::Cubic(s) => s.y_roots(y),
            Self::Arc(s) => s.y_roots(y),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn unit_params_clamps_and_dedups() {
        let ts = unit_params([1.0 + 1e-12, 0.5, -0.2, 0.5, -1e-12, 1.3]);
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn interior_params_drops_endpoints() {
        assert_eq!(interior_params([0.0, 0.25, 1.0, 0.75, 0.25]), vec![0.25, 0.75]);
    }

    #[test]
    fn downward_ray_hits_horizontal_line() {
        let seg = PathSegment::from(Line::new(p(-1.0, -2.0), p(1.0, -2.0)).unwrap());
        let ray = Ray2::new(p(0.0, 0.0), Vector2::new(0.0, -1.0)).unwrap();
        let hits = seg.ray_intersections(&ray);
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].distance, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hits[0].point, p(0.0, -2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(hits[0].t, 0.5, epsilon = 1e-12);
        // Segment runs +x, origin is above it: on its left.
        assert_eq!(hits[0].wind, 1);

        let reversed = seg.reversed().ray_intersections(&ray);
        assert_eq!(reversed[0].wind, -1);
    }

    #[test]
    fn ray_ignores_segments_behind_origin() {
        let seg = PathSegment::from(Line::new(p(-1.0, 2.0), p(1.0, 2.0)).unwrap());
        let ray = Ray2::new(p(0.0, 0.0), Vector2::new(0.0, -1.0)).unwrap();
        assert!(seg.ray_intersections(&ray).is_empty());
    }

    #[test]
    fn ray_hits_sorted_by_distance() {
        // A semicircle bulging downward crossed twice by a horizontal ray.
        let arc = PathSegment::from(Arc::circular(p(0.0, 0.0), 1.0, 0.0, -std::f64::consts::PI).unwrap());
        let ray = Ray2::new(p(-3.0, -0.5), Vector2::x()).unwrap();
        let hits = arc.ray_intersections(&ray);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].distance < hits[1].distance);
        assert_eq!(hits[0].wind, -hits[1].wind);
    }

    #[test]
    fn dispatch_matches_inner_segment() {
        let q = Quadratic::new(p(0.0, 0.0), p(1.0, -2.0), p(2.0, 0.0));
        let seg = PathSegment::from(q);
        assert_eq!(seg.interior_extrema_ts(), q.interior_extrema_ts());
        assert_abs_diff_eq!(seg.signed_area_fragment(), q.signed_area_fragment());
        assert_eq!(seg.bounds(), q.bounds());
        assert_abs_diff_eq!(seg.bounds().top(), -1.0, epsilon = 1e-12);
    }
}
