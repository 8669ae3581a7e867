pub mod edge;
pub mod half_edge;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use vertex::{VertexData, VertexId};

use crate::error::{Result, TopologyError};
use crate::geometry::{Line, PathSegment, Segment};
use crate::math::{Point2, TOLERANCE};
use slotmap::SlotMap;

/// Maximum distance between a segment endpoint and the vertex it attaches to.
pub const ENDPOINT_TOLERANCE: f64 = TOLERANCE * 1000.0;

/// Central arena that owns the half-edge graph.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
/// Boundaries hold `HalfEdgeId`s into this graph without owning them.
#[derive(Debug, Default)]
pub struct PlanarGraph {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
}

impl PlanarGraph {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts an isolated vertex and returns its ID.
    pub fn add_vertex(&mut self, point: Point2) -> VertexId {
        self.vertices.insert(VertexData::new(point))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()).into())
    }

    /// Half-edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found in the graph.
    pub fn outgoing(&self, vertex: VertexId) -> Result<&[HalfEdgeId]> {
        Ok(&self.vertex(vertex)?.outgoing)
    }

    // --- Edge operations ---

    /// Inserts an edge between two existing vertices along `segment` and
    /// creates its two half-edges.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing or the segment endpoints
    /// do not coincide with the vertex positions.
    pub fn add_edge(
        &mut self,
        start: VertexId,
        end: VertexId,
        segment: PathSegment,
    ) -> Result<EdgeId> {
        let start_point = self.vertex(start)?.point;
        let end_point = self.vertex(end)?.point;
        if (segment.start() - start_point).norm() > ENDPOINT_TOLERANCE
            || (segment.end() - end_point).norm() > ENDPOINT_TOLERANCE
        {
            return Err(TopologyError::InvalidTopology(format!(
                "segment ({}, {}) -> ({}, {}) does not meet its vertices",
                segment.start().x,
                segment.start().y,
                segment.end().x,
                segment.end().y
            ))
            .into());
        }

        let fragment = segment.signed_area_fragment();
        let half_edges = &mut self.half_edges;
        let edge_id = self.edges.insert_with_key(|edge_id| {
            let forward = half_edges.insert(HalfEdgeData {
                edge: edge_id,
                reversed: false,
                signed_area_fragment: fragment,
            });
            let backward = half_edges.insert(HalfEdgeData {
                edge: edge_id,
                reversed: true,
                signed_area_fragment: -fragment,
            });
            EdgeData {
                start,
                end,
                segment,
                forward,
                backward,
            }
        });

        let (forward, backward) = {
            let edge = &self.edges[edge_id];
            (edge.forward, edge.backward)
        };
        if let Some(v) = self.vertices.get_mut(start) {
            v.outgoing.push(forward);
        }
        if let Some(v) = self.vertices.get_mut(end) {
            v.outgoing.push(backward);
        }
        Ok(edge_id)
    }

    /// Adds a closed straight-line loop through `points` and returns its
    /// forward half-edges in loop order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given or two
    /// consecutive points coincide.
    pub fn add_polygon(&mut self, points: &[Point2]) -> Result<Vec<HalfEdgeId>> {
        if points.len() < 2 {
            return Err(
                TopologyError::InvalidTopology("polygon needs at least two points".into()).into(),
            );
        }
        let vertex_ids: Vec<VertexId> = points.iter().map(|p| self.add_vertex(*p)).collect();
        let n = points.len();
        let mut loop_edges = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            let line = Line::new(points[i], points[j])?;
            let edge_id = self.add_edge(vertex_ids[i], vertex_ids[j], line.into())?;
            loop_edges.push(self.edges[edge_id].forward);
        }
        Ok(loop_edges)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()).into())
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Half-edge operations ---

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()).into())
    }

    /// Iterates over all half-edge IDs in arena order.
    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.half_edges.keys()
    }

    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// The undirected segment of the edge under `half_edge`.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its edge is missing.
    pub fn segment(&self, half_edge: HalfEdgeId) -> Result<&PathSegment> {
        let edge = self.edge(self.half_edge(half_edge)?.edge)?;
        Ok(&edge.segment)
    }

    /// The segment oriented along `half_edge`'s traversal direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its edge is missing.
    pub fn directional_segment(&self, half_edge: HalfEdgeId) -> Result<PathSegment> {
        let data = self.half_edge(half_edge)?;
        let segment = &self.edge(data.edge)?.segment;
        Ok(if data.reversed {
            segment.reversed()
        } else {
            *segment
        })
    }

    /// The opposite half-edge of the same edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its edge is missing.
    pub fn twin(&self, half_edge: HalfEdgeId) -> Result<HalfEdgeId> {
        let data = self.half_edge(half_edge)?;
        let edge = self.edge(data.edge)?;
        Ok(if data.reversed {
            edge.forward
        } else {
            edge.backward
        })
    }

    /// Vertex the half-edge leaves from.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its edge is missing.
    pub fn start_vertex(&self, half_edge: HalfEdgeId) -> Result<VertexId> {
        let data = self.half_edge(half_edge)?;
        let edge = self.edge(data.edge)?;
        Ok(if data.reversed { edge.end } else { edge.start })
    }

    /// Vertex the half-edge arrives at.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its edge is missing.
    pub fn end_vertex(&self, half_edge: HalfEdgeId) -> Result<VertexId> {
        let data = self.half_edge(half_edge)?;
        let edge = self.edge(data.edge)?;
        Ok(if data.reversed { edge.start } else { edge.end })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;
    use crate::geometry::Arc;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn edge_creates_twin_half_edges() {
        let mut graph = PlanarGraph::new();
        let a = graph.add_vertex(p(0.0, 0.0));
        let b = graph.add_vertex(p(2.0, 1.0));
        let edge = graph
            .add_edge(a, b, Line::new(p(0.0, 0.0), p(2.0, 1.0)).unwrap().into())
            .unwrap();
        let data = graph.edge(edge).unwrap();
        let (fwd, bwd) = (data.forward, data.backward);

        assert_eq!(graph.half_edge_count(), 2);
        assert_eq!(graph.twin(fwd).unwrap(), bwd);
        assert_eq!(graph.twin(bwd).unwrap(), fwd);
        assert_eq!(graph.start_vertex(fwd).unwrap(), a);
        assert_eq!(graph.end_vertex(fwd).unwrap(), b);
        assert_eq!(graph.start_vertex(bwd).unwrap(), b);
        assert_eq!(graph.outgoing(a).unwrap(), &[fwd]);
        assert_eq!(graph.outgoing(b).unwrap(), &[bwd]);

        let f = graph.half_edge(fwd).unwrap().signed_area_fragment;
        let r = graph.half_edge(bwd).unwrap().signed_area_fragment;
        assert_abs_diff_eq!(f, -r);
    }

    #[test]
    fn directional_segment_reverses_backward() {
        let mut graph = PlanarGraph::new();
        let hs = graph.add_polygon(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
        let back = graph.twin(hs[0]).unwrap();
        let seg = graph.directional_segment(back).unwrap();
        assert_eq!(seg.start(), p(1.0, 0.0));
        assert_eq!(seg.end(), p(0.0, 0.0));
        // The undirected segment keeps its natural orientation.
        assert_eq!(graph.segment(back).unwrap().start(), p(0.0, 0.0));
    }

    #[test]
    fn mismatched_segment_rejected() {
        let mut graph = PlanarGraph::new();
        let a = graph.add_vertex(p(0.0, 0.0));
        let b = graph.add_vertex(p(1.0, 0.0));
        let err = graph
            .add_edge(a, b, Line::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap().into())
            .unwrap_err();
        assert!(matches!(
            err,
            PlanarError::Topology(TopologyError::InvalidTopology(_))
        ));
    }

    #[test]
    fn arc_edge_accepted_within_tolerance() {
        let mut graph = PlanarGraph::new();
        let a = graph.add_vertex(p(0.0, 0.0));
        let b = graph.add_vertex(p(2.0, 0.0));
        let arc = Arc::from_bulge(&p(0.0, 0.0), &p(2.0, 0.0), 1.0).unwrap();
        assert!(graph.add_edge(a, b, arc.into()).is_ok());
    }

    #[test]
    fn polygon_half_edges_chain() {
        let mut graph = PlanarGraph::new();
        let hs = graph
            .add_polygon(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)])
            .unwrap();
        assert_eq!(hs.len(), 4);
        assert_eq!(graph.edge_count(), 4);
        for i in 0..hs.len() {
            let next = hs[(i + 1) % hs.len()];
            assert_eq!(
                graph.end_vertex(hs[i]).unwrap(),
                graph.start_vertex(next).unwrap()
            );
        }
    }

    #[test]
    fn degenerate_polygon_rejected() {
        let mut graph = PlanarGraph::new();
        assert!(graph.add_polygon(&[p(0.0, 0.0)]).is_err());
        assert!(graph.add_polygon(&[p(0.0, 0.0), p(0.0, 0.0)]).is_err());
    }
}
