use crate::math::{Bounds2, Point2};

use super::segment::{PathSegment, Segment};

/// An ordered run of drawable segments, optionally closed.
///
/// For a closed subpath the end of the last segment is the start of the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subpath {
    segments: Vec<PathSegment>,
    closed: bool,
}

impl Subpath {
    #[must_use]
    pub fn new(segments: Vec<PathSegment>, closed: bool) -> Self {
        Self { segments, closed }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn start(&self) -> Option<Point2> {
        self.segments.first().map(Segment::start)
    }

    #[must_use]
    pub fn end(&self) -> Option<Point2> {
        self.segments.last().map(Segment::end)
    }

    /// Union of the segment bounds, [`Bounds2::NOTHING`] when empty.
    #[must_use]
    pub fn bounds(&self) -> Bounds2 {
        self.segments
            .iter()
            .fold(Bounds2::NOTHING, |acc, s| acc.include_bounds(&s.bounds()))
    }

    /// Sum of segment area fragments; the enclosed signed area when closed.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.segments.iter().map(Segment::signed_area_fragment).sum()
    }
}
