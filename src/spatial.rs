//! Nearest-vertex queries over a boundary's vertices.

use crate::float_types::Real;
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use nalgebra::Point2;
use tracing::debug;

/// Result of a nearest-vertex query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Index of the vertex in the indexed point set.
    pub vertex: usize,
    /// Euclidean distance from the query point to that vertex.
    pub distance: Real,
}

/// Exact nearest-neighbour index over a fixed set of 2D points.
///
/// Read-only once built, so a single index can be shared across worker
/// threads. The tree is balanced from the whole point set at once, which
/// keeps axis-aligned boundaries (many vertices sharing one coordinate)
/// legal. When several vertices are equidistant the tree decides which one
/// is reported.
pub struct VertexIndex {
    tree: Option<ImmutableKdTree<Real, 2>>,
    len: usize,
}

impl VertexIndex {
    pub fn build(points: &[Point2<Real>]) -> Self {
        let coords: Vec<[Real; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        let tree =
            (!coords.is_empty()).then(|| ImmutableKdTree::<Real, 2>::new_from_slice(&coords));
        debug!(vertices = points.len(), "built vertex kd-tree");
        Self {
            tree,
            len: points.len(),
        }
    }

    /// Closest indexed vertex to `query`. `None` only for an empty index.
    #[inline]
    pub fn nearest(&self, query: &Point2<Real>) -> Option<Nearest> {
        let hit = self
            .tree
            .as_ref()?
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        Some(Nearest {
            vertex: hit.item as usize,
            distance: hit.distance.sqrt(),
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for VertexIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexIndex").field("len", &self.len).finish()
    }
}
