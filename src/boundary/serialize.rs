use serde::Serialize;
use slotmap::Key;

use crate::math::Bounds2;

use super::{Boundary, BoundaryId};

/// State dump of a boundary. Referenced objects appear as ids only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedBoundary {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: u64,
    pub half_edges: Vec<u64>,
    pub signed_area: f64,
    pub bounds: Bounds2,
    pub child_boundaries: Vec<u64>,
}

impl SerializedBoundary {
    pub(crate) fn new(id: BoundaryId, boundary: &Boundary) -> Self {
        Self {
            kind: "Boundary",
            id: id.data().as_ffi(),
            half_edges: boundary
                .half_edges()
                .iter()
                .map(|h| h.data().as_ffi())
                .collect(),
            signed_area: boundary.signed_area(),
            bounds: boundary.bounds(),
            child_boundaries: boundary
                .child_boundaries()
                .iter()
                .map(|c| c.data().as_ffi())
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryPool;
    use crate::math::Point2;
    use crate::topology::PlanarGraph;

    #[test]
    fn serialized_form_uses_ids() {
        let mut graph = PlanarGraph::new();
        let hs = graph
            .add_polygon(&[
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
            ])
            .unwrap();
        let hole = graph
            .add_polygon(&[
                Point2::new(0.5, 0.5),
                Point2::new(0.5, 1.0),
                Point2::new(1.0, 1.0),
            ])
            .unwrap();
        let mut pool = BoundaryPool::new();
        let outer = pool.create(&graph, &hs).unwrap();
        let inner = pool.create(&graph, &hole).unwrap();
        pool.get_mut(outer).unwrap().add_child_boundary(inner);

        let dump = pool.serialize(outer).unwrap();
        assert_eq!(dump.id, outer.data().as_ffi());
        assert_eq!(dump.child_boundaries, vec![inner.data().as_ffi()]);
        assert_eq!(dump.half_edges.len(), 4);

        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["type"], "Boundary");
        assert_eq!(json["signedArea"], 4.0);
        assert_eq!(json["halfEdges"].as_array().unwrap().len(), 4);
        assert_eq!(json["childBoundaries"][0], inner.data().as_ffi());
        assert_eq!(json["bounds"]["maxX"], 2.0);
    }
}
