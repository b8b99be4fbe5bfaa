//! Vertex to outgoing-edge lookup.

use crate::errors::{SdfError, SdfResult};

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashmap"))]
use std::collections::HashMap;

/// Maps each edge-start vertex to the row of the edge leaving it.
///
/// Built once from the connectivity list, so every lookup during
/// evaluation is a single hash probe.
#[derive(Debug, Clone, Default)]
pub struct OutgoingEdges {
    by_start: HashMap<usize, usize>,
}

impl OutgoingEdges {
    /// Index `edges` by their start vertex.
    ///
    /// Fails with [`SdfError::DuplicateOutgoingEdge`] when a vertex starts
    /// more than one edge, since the lookup would then be ambiguous.
    pub fn from_edges(edges: &[[usize; 2]]) -> SdfResult<Self> {
        let mut by_start = HashMap::with_capacity(edges.len());
        for (row, &[start, _]) in edges.iter().enumerate() {
            if let Some(first) = by_start.insert(start, row) {
                return Err(SdfError::DuplicateOutgoingEdge {
                    vertex: start,
                    first,
                    second: row,
                });
            }
        }
        Ok(Self { by_start })
    }

    /// Row of the edge starting at `vertex`, if any.
    #[inline]
    pub fn edge_of(&self, vertex: usize) -> Option<usize> {
        self.by_start.get(&vertex).copied()
    }

    /// Like [`edge_of`](Self::edge_of), failing on a lookup miss.
    #[inline]
    pub fn require(&self, vertex: usize) -> SdfResult<usize> {
        self.edge_of(vertex)
            .ok_or(SdfError::MissingOutgoingEdge { vertex })
    }

    /// Edge rows for a batch of (possibly repeated) start vertices, in the
    /// order of `vertices`.
    pub fn find_closest_edges(&self, vertices: &[usize]) -> SdfResult<Vec<usize>> {
        vertices.iter().map(|&v| self.require(v)).collect()
    }

    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }
}
