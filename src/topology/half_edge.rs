use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the planar graph.
    pub struct HalfEdgeId;
}

/// One directed traversal of an edge.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdgeData {
    /// The underlying edge.
    pub edge: EdgeId,
    /// If `false`, the edge is traversed in its natural direction (start → end).
    /// If `true`, the edge is traversed in reverse (end → start).
    pub reversed: bool,
    /// This traversal's contribution to the signed area of any loop it is
    /// part of; the two half-edges of one edge carry opposite values.
    pub signed_area_fragment: f64,
}
