use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The closing edge
/// from the last point back to the first is implied.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the lowest vertex of a polygon, first one wins on ties.
#[must_use]
pub fn lowest_point(points: &[Point2]) -> Option<Point2> {
    let mut iter = points.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |best, pt| if pt.y < best.y - TOLERANCE { pt } else { best }))
}
