use tracing::{debug, instrument, trace};

use crate::boundary::{BoundaryId, BoundaryPool};
use crate::error::{OperationError, Result};
use crate::geometry::segment::PARAM_TOLERANCE;
use crate::geometry::{RayHit, Segment};
use crate::topology::{EdgeData, HalfEdgeId, PlanarGraph, VertexId};

use super::params::FaceParams;
use super::trace::{first_clockwise, TraceBoundaries};

/// A region of the plane: one enclosing boundary and any number of holes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Counter-clockwise boundary enclosing the face, `None` for the
    /// unbounded face.
    pub boundary: Option<BoundaryId>,
    /// Clockwise boundaries of components lying inside the face.
    pub holes: Vec<BoundaryId>,
}

/// Result of face assembly.
#[derive(Debug, Clone)]
pub struct FaceSet {
    /// Bounded faces, one per counter-clockwise boundary.
    pub faces: Vec<Face>,
    /// The face extending to infinity.
    pub unbounded: Face,
}

impl FaceSet {
    /// Every boundary referenced by this set.
    pub fn boundaries(&self) -> impl Iterator<Item = BoundaryId> + '_ {
        self.faces
            .iter()
            .chain(std::iter::once(&self.unbounded))
            .flat_map(|face| face.boundary.into_iter().chain(face.holes.iter().copied()))
    }

    /// Disposes every boundary of the set back into `pool`.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::Disposed` if a boundary was already released.
    pub fn release(self, pool: &mut BoundaryPool) -> Result<()> {
        for id in self.boundaries() {
            pool.dispose(id)?;
        }
        Ok(())
    }
}

/// Assembles faces from the boundaries of a planar graph.
///
/// Clockwise boundaries are attached to the face that contains them by
/// casting their extreme ray and finding the nearest edge it crosses; the
/// side of that edge the ray starts on decides which half-edge, and hence
/// which boundary, encloses it.
pub struct BuildFaces {
    params: FaceParams,
}

impl BuildFaces {
    /// Creates a new `BuildFaces` operation.
    #[must_use]
    pub fn new(params: FaceParams) -> Self {
        Self { params }
    }

    /// Executes the operation. Boundaries are allocated from `pool` and
    /// stay active until the returned set is released.
    ///
    /// # Errors
    ///
    /// Propagates tracing errors and extreme point failures.
    #[instrument(skip_all)]
    pub fn execute(&self, graph: &PlanarGraph, pool: &mut BoundaryPool) -> Result<FaceSet> {
        let traced = TraceBoundaries::new().execute(graph, pool)?;

        let mut inner = Vec::new();
        let mut outer = Vec::new();
        for &id in &traced {
            if pool.get(id)?.is_inner() {
                inner.push(id);
            } else {
                outer.push(id);
            }
        }
        debug!(inner = inner.len(), outer = outer.len(), "classified boundaries");

        let mut unattached = Vec::new();
        for &id in &outer {
            match self.find_container(graph, pool, &traced, id)? {
                Some(parent) => {
                    trace!(child = ?id, parent = ?parent, "nested boundary");
                    pool.get_mut(parent)?.add_child_boundary(id);
                }
                None => unattached.push(id),
            }
        }

        let mut faces = Vec::with_capacity(inner.len());
        for &id in &inner {
            let mut holes = Vec::new();
            collect_descendants(pool, pool.get(id)?.child_boundaries(), &mut holes)?;
            faces.push(Face {
                boundary: Some(id),
                holes,
            });
        }
        let mut holes = Vec::new();
        collect_descendants(pool, &unattached, &mut holes)?;
        let unbounded = Face {
            boundary: None,
            holes,
        };

        debug!(
            faces = faces.len(),
            unbounded_holes = unbounded.holes.len(),
            "assembled faces"
        );
        Ok(FaceSet { faces, unbounded })
    }

    /// The boundary whose face contains the clockwise boundary `id`.
    fn find_container(
        &self,
        graph: &PlanarGraph,
        pool: &BoundaryPool,
        traced: &[BoundaryId],
        id: BoundaryId,
    ) -> Result<Option<BoundaryId>> {
        let boundary = pool.get(id)?;
        let ray = boundary.compute_extreme_ray(graph, &self.params.transform)?;

        let mut closest: Option<(&EdgeData, RayHit)> = None;
        for (_, edge) in graph.edges() {
            if boundary.has_half_edge(edge.forward) || boundary.has_half_edge(edge.backward) {
                continue;
            }
            if let Some(hit) = edge.segment.ray_intersections(&ray).first() {
                if closest.is_none_or(|(_, best)| hit.distance < best.distance) {
                    closest = Some((edge, *hit));
                }
            }
        }

        let Some((edge, hit)) = closest else {
            return Ok(None);
        };
        let vertex = hit_vertex(edge, &hit);
        trace!(distance = hit.distance, at_vertex = vertex.is_some(), "closest crossing");
        let heading = match vertex {
            // Every edge at the vertex reports the same hit; the sector the
            // ray arrives through decides.
            Some(vertex) => first_clockwise(graph, vertex, &-ray.direction, None)?
                .ok_or_else(|| OperationError::Failed("crossed vertex has no edges".into()))?,
            None => crossed_half_edge(edge, &hit),
        };
        for &candidate in traced {
            if pool.get(candidate)?.has_half_edge(heading) {
                return Ok(Some(candidate));
            }
        }
        Err(OperationError::Failed("crossed half-edge is on no traced boundary".into()).into())
    }
}

/// The half-edge of `edge` that faces the ray origin.
fn crossed_half_edge(edge: &EdgeData, hit: &RayHit) -> HalfEdgeId {
    if hit.wind > 0 {
        edge.forward
    } else {
        edge.backward
    }
}

/// The endpoint of `edge` the hit lands on, if any.
fn hit_vertex(edge: &EdgeData, hit: &RayHit) -> Option<VertexId> {
    if hit.t <= PARAM_TOLERANCE {
        Some(edge.start)
    } else if hit.t >= 1.0 - PARAM_TOLERANCE {
        Some(edge.end)
    } else {
        None
    }
}

/// Appends `children` and, depth first, all of their children to `out`.
fn collect_descendants(
    pool: &BoundaryPool,
    children: &[BoundaryId],
    out: &mut Vec<BoundaryId>,
) -> Result<()> {
    for &child in children {
        out.push(child);
        collect_descendants(pool, pool.get(child)?.child_boundaries(), out)?;
    }
    Ok(())
}
