//! Error types for boundary validation and signed distance evaluation

use crate::float_types::Real;

/// Result type for signed distance operations.
pub type SdfResult<T> = Result<T, SdfError>;

/// All the possible failures we might encounter while building a grid,
/// validating a boundary, or evaluating a signed distance field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SdfError {
    /// (EmptyBoundary) The boundary has no vertices
    #[error("(EmptyBoundary) The boundary has no vertices")]
    EmptyBoundary,

    /// (InvalidGrid) Background grid parameters are unusable
    #[error("(InvalidGrid) {0}")]
    InvalidGrid(String),

    /// (LengthMismatch) Field values and grid points do not pair up
    #[error("(LengthMismatch) {values} values for {points} grid points")]
    LengthMismatch { values: usize, points: usize },

    /// (InvalidShape) Generator parameters do not describe a shape
    #[error("(InvalidShape) {0}")]
    InvalidShape(String),

    /// (InvalidCoordinate) A boundary vertex has a NaN or infinite coordinate
    #[error("(InvalidCoordinate) Vertex {vertex} ({x}, {y}) has a NaN or infinite coordinate")]
    InvalidCoordinate { vertex: usize, x: Real, y: Real },

    /// (EdgeOutOfRange) An edge references a vertex that does not exist
    #[error("(EdgeOutOfRange) Edge {edge} references vertex {vertex}, but the boundary has {len} vertices")]
    EdgeOutOfRange { edge: usize, vertex: usize, len: usize },

    /// (DuplicateOutgoingEdge) A vertex starts more than one edge
    #[error("(DuplicateOutgoingEdge) Vertex {vertex} starts both edge {first} and edge {second}")]
    DuplicateOutgoingEdge {
        vertex: usize,
        first: usize,
        second: usize,
    },

    /// (MissingOutgoingEdge) A nearest vertex has no edge leaving it
    #[error("(MissingOutgoingEdge) Vertex {vertex} is not the start of any edge")]
    MissingOutgoingEdge { vertex: usize },
}

impl SdfError {
    /// `true` for errors caused by a boundary whose connectivity breaks the
    /// one-outgoing-edge-per-vertex contract.
    pub const fn is_malformed_boundary(&self) -> bool {
        matches!(
            self,
            SdfError::EdgeOutOfRange { .. }
                | SdfError::DuplicateOutgoingEdge { .. }
                | SdfError::MissingOutgoingEdge { .. }
        )
    }

    /// `true` for errors caused by empty or out-of-domain parameters.
    pub const fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            SdfError::EmptyBoundary
                | SdfError::InvalidGrid(_)
                | SdfError::LengthMismatch { .. }
                | SdfError::InvalidShape(_)
                | SdfError::InvalidCoordinate { .. }
        )
    }
}
