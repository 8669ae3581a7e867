use slotmap::SecondaryMap;
use tracing::{debug, instrument};

use crate::boundary::{BoundaryId, BoundaryPool};
use crate::error::{Result, TopologyError};
use crate::geometry::{PathSegment, Segment};
use crate::math::{normalize_angle, Vector2, TOLERANCE};
use crate::topology::{HalfEdgeId, PlanarGraph, VertexId};

/// Parameter step used when a curve has a vanishing end tangent.
const TANGENT_PROBE: f64 = 1e-3;

/// Splits every half-edge of a graph into closed boundaries.
///
/// Each half-edge ends up in exactly one boundary. The face a boundary
/// encloses lies on its left, so counter-clockwise loops bound regions and
/// clockwise loops are the outside of a connected component.
#[derive(Debug, Default)]
pub struct TraceBoundaries;

impl TraceBoundaries {
    /// Creates a new `TraceBoundaries` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Traces all boundaries of `graph` into `pool`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if a walk does not close
    /// (a vertex with no outgoing half-edge or a non-planar rotation), and
    /// propagates graph lookup errors.
    #[instrument(skip_all)]
    pub fn execute(&self, graph: &PlanarGraph, pool: &mut BoundaryPool) -> Result<Vec<BoundaryId>> {
        let mut visited: SecondaryMap<HalfEdgeId, ()> = SecondaryMap::new();
        let mut boundaries = Vec::new();
        let mut cycle = Vec::new();
        let limit = graph.half_edge_count();

        for start in graph.half_edge_ids() {
            if visited.contains_key(start) {
                continue;
            }
            cycle.clear();
            let mut current = start;
            loop {
                if visited.insert(current, ()).is_some() {
                    return Err(TopologyError::InvalidTopology(
                        "boundary walk revisited a half-edge".into(),
                    )
                    .into());
                }
                cycle.push(current);
                current = next_half_edge(graph, current)?;
                if current == start {
                    break;
                }
                if cycle.len() > limit {
                    return Err(TopologyError::InvalidTopology(
                        "boundary walk did not close".into(),
                    )
                    .into());
                }
            }
            boundaries.push(pool.create(graph, &cycle)?);
        }

        debug!(
            half_edges = limit,
            boundaries = boundaries.len(),
            "traced boundaries"
        );
        Ok(boundaries)
    }
}

/// The half-edge that follows `half_edge` around the face on its left.
///
/// The twin is the last resort, which walks around dangling edges.
fn next_half_edge(graph: &PlanarGraph, half_edge: HalfEdgeId) -> Result<HalfEdgeId> {
    let vertex = graph.end_vertex(half_edge)?;
    let twin = graph.twin(half_edge)?;
    let back = -arrival_direction(&graph.directional_segment(half_edge)?);
    first_clockwise(graph, vertex, &back, Some(twin))?.ok_or_else(|| {
        TopologyError::InvalidTopology("vertex has no outgoing half-edge".into()).into()
    })
}

/// The outgoing half-edge of `vertex` reached first when sweeping clockwise
/// from `direction`. The face on its left is the one that `direction`
/// points into.
///
/// `last_resort` is only chosen when nothing else leaves the vertex.
pub(super) fn first_clockwise(
    graph: &PlanarGraph,
    vertex: VertexId,
    direction: &Vector2,
    last_resort: Option<HalfEdgeId>,
) -> Result<Option<HalfEdgeId>> {
    let from_angle = direction.y.atan2(direction.x);
    let mut best: Option<(f64, HalfEdgeId)> = None;
    for &candidate in graph.outgoing(vertex)? {
        // Above every normalized turn, including a rounded-up TAU.
        let turn = if Some(candidate) == last_resort {
            f64::INFINITY
        } else {
            let out = departure_direction(&graph.directional_segment(candidate)?);
            normalize_angle(from_angle - out.y.atan2(out.x))
        };
        if best.is_none_or(|(best_turn, _)| turn < best_turn) {
            best = Some((turn, candidate));
        }
    }
    Ok(best.map(|(_, h)| h))
}

fn departure_direction(segment: &PathSegment) -> Vector2 {
    let tangent = segment.tangent_at(0.0);
    if tangent.norm() > TOLERANCE {
        tangent
    } else {
        segment.position_at(TANGENT_PROBE) - segment.start()
    }
}

fn arrival_direction(segment: &PathSegment) -> Vector2 {
    let tangent = segment.tangent_at(1.0);
    if tangent.norm() > TOLERANCE {
        tangent
    } else {
        segment.end() - segment.position_at(1.0 - TANGENT_PROBE)
    }
}
