use slotmap::SlotMap;

use crate::error::{BoundaryError, Result};
use crate::topology::{HalfEdgeId, PlanarGraph};

use super::serialize::SerializedBoundary;
use super::{Boundary, BoundaryId};

/// Arena of boundaries with reuse of disposed instances.
///
/// Active boundaries live in a slotmap; disposing one removes its slot, which
/// bumps the slot generation so every outstanding [`BoundaryId`] for it fails
/// with [`BoundaryError::Disposed`]. The cleared instance, with its buffers,
/// goes onto a free stack and is handed out again by the next
/// [`BoundaryPool::create`].
#[derive(Debug, Default)]
pub struct BoundaryPool {
    active: SlotMap<BoundaryId, Boundary>,
    pooled: Vec<Boundary>,
}

impl BoundaryPool {
    /// Creates a new, empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a boundary for the closed loop `half_edges`.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge is not in `graph`. The pooled
    /// instance is kept for reuse in that case.
    pub fn create(&mut self, graph: &PlanarGraph, half_edges: &[HalfEdgeId]) -> Result<BoundaryId> {
        let mut boundary = self.pooled.pop().unwrap_or_default();
        if let Err(err) = boundary.initialize(graph, half_edges) {
            boundary.clear();
            self.pooled.push(boundary);
            return Err(err);
        }
        Ok(self.active.insert(boundary))
    }

    /// Returns the active boundary for `id`.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::Disposed` if `id` is not active.
    pub fn get(&self, id: BoundaryId) -> Result<&Boundary> {
        self.active.get(id).ok_or_else(|| BoundaryError::Disposed.into())
    }

    /// Returns the active boundary for `id` mutably.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::Disposed` if `id` is not active.
    pub fn get_mut(&mut self, id: BoundaryId) -> Result<&mut Boundary> {
        self.active
            .get_mut(id)
            .ok_or_else(|| BoundaryError::Disposed.into())
    }

    /// Whether `id` refers to an active boundary.
    #[must_use]
    pub fn contains(&self, id: BoundaryId) -> bool {
        self.active.contains_key(id)
    }

    /// Clears the boundary and returns its instance to the free stack.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::Disposed` if `id` is not active (including a
    /// second dispose of the same handle).
    pub fn dispose(&mut self, id: BoundaryId) -> Result<()> {
        let mut boundary = self.active.remove(id).ok_or(BoundaryError::Disposed)?;
        boundary.clear();
        self.pooled.push(boundary);
        Ok(())
    }

    /// Disposes every active boundary.
    pub fn dispose_all(&mut self) {
        for (_, mut boundary) in self.active.drain() {
            boundary.clear();
            self.pooled.push(boundary);
        }
    }

    /// Number of active boundaries.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of instances waiting for reuse.
    #[must_use]
    pub fn pooled_len(&self) -> usize {
        self.pooled.len()
    }

    /// Iterates over active boundaries.
    pub fn iter(&self) -> impl Iterator<Item = (BoundaryId, &Boundary)> {
        self.active.iter()
    }

    /// Diagnostic dump of one active boundary.
    ///
    /// # Errors
    ///
    /// Returns `BoundaryError::Disposed` if `id` is not active.
    pub fn serialize(&self, id: BoundaryId) -> Result<SerializedBoundary> {
        Ok(SerializedBoundary::new(id, self.get(id)?))
    }
}
