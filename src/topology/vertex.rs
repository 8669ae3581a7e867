use crate::math::Point2;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the planar graph.
    pub struct VertexId;
}

/// Data associated with a graph vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The position of the vertex.
    pub point: Point2,
    /// Half-edges leaving this vertex, in insertion order.
    pub outgoing: Vec<HalfEdgeId>,
}

impl VertexData {
    /// Creates a new isolated vertex at the given point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            outgoing: Vec::new(),
        }
    }
}
