mod pool;
mod serialize;

pub use pool::BoundaryPool;
pub use serialize::SerializedBoundary;

use crate::error::{BoundaryError, GeometryError, Result};
use crate::geometry::{PathSegment, Segment, Subpath};
use crate::math::{Bounds2, Point2, Ray2, Transform2, Vector2, TOLERANCE};
use crate::topology::{HalfEdgeId, PlanarGraph};

slotmap::new_key_type! {
    /// Handle to an active boundary in a [`BoundaryPool`].
    pub struct BoundaryId;
}

/// Distance the extreme ray origin is pushed off the boundary.
pub const EXTREME_RAY_NUDGE: f64 = 1e-4;

/// A closed cycle of half-edges tracing the outline of one region.
///
/// `signed_area` and `bounds` are computed once when the boundary is
/// initialized. The half-edge sequence has no mutable accessor, so the
/// cached values cannot go stale while the boundary is active.
///
/// Counter-clockwise boundaries (positive signed area) are *inner*: they
/// bound a face on their left. Clockwise boundaries are *outer* and end up
/// as holes of some face.
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    half_edges: Vec<HalfEdgeId>,
    signed_area: f64,
    bounds: Bounds2,
    child_boundaries: Vec<BoundaryId>,
}

impl Boundary {
    /// (Re)initializes this boundary from a closed half-edge sequence.
    ///
    /// The caller guarantees the sequence is non-empty and that each
    /// half-edge ends where the next one starts (cyclically). Existing
    /// buffers are reused.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge is not in `graph`.
    pub fn initialize(
        &mut self,
        graph: &PlanarGraph,
        half_edges: &[HalfEdgeId],
    ) -> Result<&mut Self> {
        self.half_edges.clear();
        self.half_edges.extend_from_slice(half_edges);
        self.child_boundaries.clear();
        self.signed_area = self.compute_signed_area(graph)?;
        self.bounds = self.compute_bounds(graph)?;
        Ok(self)
    }

    /// Clears all references so the instance can be pooled.
    fn clear(&mut self) {
        self.half_edges.clear();
        self.child_boundaries.clear();
        self.signed_area = 0.0;
        self.bounds = Bounds2::NOTHING;
    }

    /// The half-edges in loop order.
    #[must_use]
    pub fn half_edges(&self) -> &[HalfEdgeId] {
        &self.half_edges
    }

    /// Signed area cached at initialization.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }

    /// Bounds cached at initialization.
    #[must_use]
    pub fn bounds(&self) -> Bounds2 {
        self.bounds
    }

    /// Boundaries recorded as nested directly inside this one.
    #[must_use]
    pub fn child_boundaries(&self) -> &[BoundaryId] {
        &self.child_boundaries
    }

    /// Records `child` as nested inside this boundary.
    pub fn add_child_boundary(&mut self, child: BoundaryId) {
        self.child_boundaries.push(child);
    }

    /// Sums the precomputed area fragments of every half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge is not in `graph`.
    pub fn compute_signed_area(&self, graph: &PlanarGraph) -> Result<f64> {
        let mut area = 0.0;
        for &h in &self.half_edges {
            area += graph.half_edge(h)?.signed_area_fragment;
        }
        Ok(area)
    }

    /// Union of the bounds of every half-edge's segment.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge is not in `graph`.
    pub fn compute_bounds(&self, graph: &PlanarGraph) -> Result<Bounds2> {
        let mut bounds = Bounds2::NOTHING;
        for &h in &self.half_edges {
            bounds = bounds.include_bounds(&graph.segment(h)?.bounds());
        }
        Ok(bounds)
    }

    /// Whether this boundary is counter-clockwise (bounds a face).
    #[must_use]
    pub fn is_inner(&self) -> bool {
        self.signed_area > 0.0
    }

    /// Whether `half_edge` is part of this loop.
    #[must_use]
    pub fn has_half_edge(&self, half_edge: HalfEdgeId) -> bool {
        self.half_edges.contains(&half_edge)
    }

    /// A point of minimal y, measured in `transform` space, mapped back into
    /// boundary space.
    ///
    /// Any of several tied minimal points may be returned.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::EmptyLoop` if the boundary has no half-edges
    /// and `BoundaryError::NoExtremeSegment` if no segment reaches the
    /// minimum (an internal inconsistency).
    pub fn compute_extreme_point(
        &self,
        graph: &PlanarGraph,
        transform: &Transform2,
    ) -> Result<Point2> {
        if self.half_edges.is_empty() {
            return Err(BoundaryError::EmptyLoop.into());
        }

        let mut segments: Vec<PathSegment> = Vec::with_capacity(self.half_edges.len());
        for &h in &self.half_edges {
            segments.push(graph.segment(h)?.transformed(transform.matrix()));
        }
        let segment_bounds: Vec<Bounds2> = segments.iter().map(Segment::bounds).collect();
        let top = segment_bounds
            .iter()
            .fold(Bounds2::NOTHING, |acc, b| acc.include_bounds(b))
            .top();

        let mut best: Option<Point2> = None;
        for (segment, bounds) in segments.iter().zip(&segment_bounds) {
            if bounds.top() - top > TOLERANCE {
                continue;
            }
            let ts = [0.0, 1.0].into_iter().chain(segment.interior_extrema_ts());
            for t in ts {
                let point = segment.position_at(t);
                if best.is_none_or(|b| point.y < b.y) {
                    best = Some(point);
                }
            }
        }

        let point = best.ok_or(BoundaryError::NoExtremeSegment)?;
        Ok(transform.inverse_position(&point))
    }

    /// A ray from just outside the extreme point, pointing away from the
    /// boundary along `transform`'s negative y axis.
    ///
    /// Re-applying `transform` to the direction gives `(0, -1)`, so rays of
    /// boundaries queried with the same transform are directly comparable.
    ///
    /// # Errors
    ///
    /// Propagates [`Boundary::compute_extreme_point`] errors and returns
    /// `GeometryError::ZeroVector` if the transform collapses the direction.
    pub fn compute_extreme_ray(
        &self,
        graph: &PlanarGraph,
        transform: &Transform2,
    ) -> Result<Ray2> {
        let point = self.compute_extreme_point(graph, transform)?;
        let direction = transform
            .inverse_delta(&Vector2::new(0.0, -1.0))
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector)?;
        Ray2::new(point + direction * EXTREME_RAY_NUDGE, direction)
    }

    /// The loop as a closed drawable subpath, following each half-edge's
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge is not in `graph`.
    pub fn to_subpath(&self, graph: &PlanarGraph) -> Result<Subpath> {
        let segments = self
            .half_edges
            .iter()
            .map(|&h| graph.directional_segment(h))
            .collect::<Result<Vec<_>>>()?;
        Ok(Subpath::new(segments, true))
    }
}
