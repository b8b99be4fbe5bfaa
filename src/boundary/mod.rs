//! Closed polygonal boundaries in the plane.
//!
//! A [`Boundary`] is the pair `(X, T)`: an ordered list of vertices and a list
//! of oriented edges `[a, b]` running from vertex `a` to vertex `b`. The
//! traversal direction of the edges fixes the sign of the distance field.

pub mod edges;
pub mod shapes;

pub use edges::OutgoingEdges;
pub use shapes::generate_circle;

use crate::errors::{SdfError, SdfResult};
use crate::float_types::{Real, tolerance};
use nalgebra::Point2;

/// Traversal direction of a boundary, from its signed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Zero signed area (collinear or self-cancelling loops).
    Degenerate,
}

/// Validated boundary: vertices plus oriented connectivity.
///
/// Invariants checked at construction:
/// - at least one vertex, all coordinates finite
/// - every edge endpoint indexes an existing vertex
/// - no vertex starts more than one edge
///
/// Vertices without an outgoing edge are accepted here; they only become an
/// error if a query point resolves to one of them.
#[derive(Debug, Clone)]
pub struct Boundary {
    vertices: Vec<Point2<Real>>,
    edges: Vec<[usize; 2]>,
    outgoing: OutgoingEdges,
}

impl Boundary {
    pub fn new(vertices: Vec<Point2<Real>>, edges: Vec<[usize; 2]>) -> SdfResult<Self> {
        if vertices.is_empty() {
            return Err(SdfError::EmptyBoundary);
        }

        if let Some((vertex, p)) = vertices
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(SdfError::InvalidCoordinate {
                vertex,
                x: p.x,
                y: p.y,
            });
        }

        let len = vertices.len();
        for (edge, pair) in edges.iter().enumerate() {
            if let Some(&vertex) = pair.iter().find(|&&v| v >= len) {
                return Err(SdfError::EdgeOutOfRange { edge, vertex, len });
            }
        }

        let outgoing = OutgoingEdges::from_edges(&edges)?;

        Ok(Self {
            vertices,
            edges,
            outgoing,
        })
    }

    /// Build from the raw `X` (n×2) and `T` (m×2) arrays.
    pub fn from_arrays(x: &[[Real; 2]], t: &[[usize; 2]]) -> SdfResult<Self> {
        let vertices = x.iter().map(|&[px, py]| Point2::new(px, py)).collect();
        Self::new(vertices, t.to_vec())
    }

    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub const fn outgoing(&self) -> &OutgoingEdges {
        &self.outgoing
    }

    /// End points `(A, B)` of edge `row`.
    #[inline]
    pub fn segment(&self, row: usize) -> (Point2<Real>, Point2<Real>) {
        let [a, b] = self.edges[row];
        (self.vertices[a], self.vertices[b])
    }

    /// Rows of edges shorter than the crate tolerance.
    pub fn degenerate_edges(&self) -> Vec<usize> {
        let tol = tolerance();
        (0..self.edges.len())
            .filter(|&row| {
                let (a, b) = self.segment(row);
                (b - a).norm() < tol
            })
            .collect()
    }

    /// Signed area enclosed by the edges (shoelace), positive for
    /// counter-clockwise traversal.
    pub fn signed_area(&self) -> Real {
        0.5 * (0..self.edges.len())
            .map(|row| {
                let (a, b) = self.segment(row);
                a.x * b.y - b.x * a.y
            })
            .sum::<Real>()
    }

    pub fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if area.abs() < tolerance() {
            Orientation::Degenerate
        } else if area > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Same geometry with every edge flipped, which negates the field.
    pub fn reversed(&self) -> SdfResult<Self> {
        let edges = self.edges.iter().map(|&[a, b]| [b, a]).collect();
        Self::new(self.vertices.clone(), edges)
    }

    /// `true` if every vertex starts exactly one edge and ends exactly one,
    /// i.e. the edges form closed loops covering all vertices.
    pub fn is_closed(&self) -> bool {
        let mut ends = vec![0usize; self.vertices.len()];
        for &[_, b] in &self.edges {
            ends[b] += 1;
        }
        self.outgoing.len() == self.vertices.len() && ends.iter().all(|&c| c == 1)
    }
}
