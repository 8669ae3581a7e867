use thiserror::Error;

/// Top-level error type for planar face construction.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the half-edge graph.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised by boundary queries.
///
/// All of these indicate malformed upstream geometry or a lifecycle bug in
/// the caller and abort the enclosing operation.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("boundary has no half-edges")]
    EmptyLoop,

    #[error("no segment reaches the minimum y of the boundary")]
    NoExtremeSegment,

    #[error("boundary handle is not active (disposed or from another pool)")]
    Disposed,
}

/// Errors related to face-building operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
