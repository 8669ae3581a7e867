use serde::Serialize;

use super::Point2;

/// An axis-aligned bounding box in the plane.
///
/// `top` is the minimum-y edge. [`Bounds2::NOTHING`] is the empty sentinel:
/// including anything into it yields exactly that thing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds2 {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::NOTHING
    }
}

impl Bounds2 {
    /// Empty bounds, the identity for [`Bounds2::include_bounds`].
    pub const NOTHING: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Creates bounds from explicit extents.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Zero-area bounds around a single point.
    #[must_use]
    pub fn point(p: &Point2) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Smallest bounds containing both points.
    #[must_use]
    pub fn from_points(a: &Point2, b: &Point2) -> Self {
        Self::point(a).include_point(b)
    }

    /// Returns `true` for the empty sentinel (or any inverted box).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Minimum-y edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.min_y
    }

    /// Maximum-y edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grows the bounds to contain `p`.
    #[must_use]
    pub fn include_point(&self, p: &Point2) -> Self {
        Self::new(
            self.min_x.min(p.x),
            self.min_y.min(p.y),
            self.max_x.max(p.x),
            self.max_y.max(p.y),
        )
    }

    /// Union of two bounds.
    #[must_use]
    pub fn include_bounds(&self, other: &Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Closed containment test.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_identity() {
        let b = Bounds2::new(-1.0, 2.0, 3.0, 4.0);
        assert_eq!(Bounds2::NOTHING.include_bounds(&b), b);
        assert_eq!(b.include_bounds(&Bounds2::NOTHING), b);
        assert!(Bounds2::NOTHING.is_empty());
        assert!(!b.is_empty());
    }

    #[test]
    fn include_point_grows() {
        let b = Bounds2::point(&Point2::new(1.0, 1.0)).include_point(&Point2::new(-2.0, 5.0));
        assert_eq!(b, Bounds2::new(-2.0, 1.0, 1.0, 5.0));
        assert!((b.top() - 1.0).abs() < f64::EPSILON);
        assert!((b.width() - 3.0).abs() < f64::EPSILON);
        assert!((b.height() - 4.0).abs() < f64::EPSILON);
        assert!(b.contains_point(&Point2::new(0.0, 3.0)));
        assert!(!b.contains_point(&Point2::new(0.0, 6.0)));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Bounds2::new(0.0, 0.0, 1.0, 2.0)).unwrap_or_default();
        assert_eq!(json["minX"], 0.0);
        assert_eq!(json["maxY"], 2.0);
    }
}
