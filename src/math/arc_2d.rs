//! 2D arc/bulge math utilities.
//!
//! Bulge convention: `bulge = tan(sweep_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle

use super::{Point2, Vector2};

/// Center/radius/angle description of a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep, positive for counter-clockwise.
    pub sweep: f64,
}

/// Converts a bulge-defined arc between `start` and `end` to center-radius-angle form.
///
/// Returns `None` for a zero-length chord or a zero bulge (straight segment).
#[must_use]
pub fn arc_from_bulge(start: &Point2, end: &Point2, bulge: f64) -> Option<CircularArc> {
    let chord: Vector2 = end - start;
    let chord_len = chord.norm();

    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return None;
    }

    // Distance from chord midpoint to center, in half-chord units.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = start + chord * 0.5;

    // Normal to chord pointing toward the center for positive bulge.
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let sweep = 4.0 * bulge.atan();

    Some(CircularArc {
        center,
        radius,
        start_angle,
        sweep,
    })
}
