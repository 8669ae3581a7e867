use crate::geometry::PathSegment;

use super::half_edge::HalfEdgeId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the planar graph.
    pub struct EdgeId;
}

/// Data associated with a graph edge.
///
/// An edge connects two vertices and carries the segment that defines its
/// shape between them. Each edge owns exactly two half-edges, one per
/// traversal direction.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge (the segment's `t = 0` end).
    pub start: VertexId,
    /// End vertex of the edge (the segment's `t = 1` end).
    pub end: VertexId,
    /// The segment defining this edge's shape.
    pub segment: PathSegment,
    /// Half-edge traversing start → end.
    pub forward: HalfEdgeId,
    /// Half-edge traversing end → start.
    pub backward: HalfEdgeId,
}
