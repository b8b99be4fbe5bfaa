//! Uniform square background grids centered at the origin.
//!
//! A [`BackgroundGrid`] is the fixed lattice of query points onto which a
//! boundary's signed distance is evaluated. Points are stored as a flat
//! sequence of `nseed * nseed` entries, grouped in blocks of `nseed` points
//! that share their axis-2 (y) value; inside a block the axis-1 (x) value
//! increases. The order of the blocks is governed by [`GridLayout`].

use crate::errors::{SdfError, SdfResult};
use crate::float_types::{Real, tolerance};
use nalgebra::Point2;

/// Order in which the lattice rows are laid out in the flat point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLayout {
    /// Block `k` holds axis-2 sample `(k + 1) % nseed`, so axis-2 sample `0`
    /// is stored in the last block. Reference fields for this crate were
    /// produced with this ordering.
    #[default]
    Shifted,
    /// Block `k` holds axis-2 sample `k`.
    RowMajor,
}

impl GridLayout {
    /// Axis-2 sample index stored in `block`.
    #[inline]
    pub const fn row_of_block(self, block: usize, nseed: usize) -> usize {
        match self {
            GridLayout::Shifted => (block + 1) % nseed,
            GridLayout::RowMajor => block,
        }
    }

    /// Block holding axis-2 sample `row`.
    #[inline]
    pub const fn block_of_row(self, row: usize, nseed: usize) -> usize {
        match self {
            GridLayout::Shifted => (row + nseed - 1) % nseed,
            GridLayout::RowMajor => row,
        }
    }
}

/// Parameters of a square background grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Half-extent: the grid spans `[-side, side]` on both axes.
    pub side: Real,
    /// Samples per axis, both endpoints included.
    pub nseed: usize,
    /// Order of the lattice rows in the flat point sequence.
    pub layout: GridLayout,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            side: 5.0,
            nseed: 100,
            layout: GridLayout::default(),
        }
    }
}

impl GridSpec {
    pub const fn new(side: Real, nseed: usize) -> Self {
        Self {
            side,
            nseed,
            layout: GridLayout::Shifted,
        }
    }

    pub const fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Reject parameters that cannot describe a lattice.
    pub fn validate(&self) -> SdfResult<()> {
        if self.nseed == 0 {
            return Err(SdfError::InvalidGrid(
                "samples per axis must be at least 1".to_string(),
            ));
        }
        if !self.side.is_finite() || self.side <= 0.0 {
            return Err(SdfError::InvalidGrid(format!(
                "half-extent must be positive and finite, got {}",
                self.side
            )));
        }
        Ok(())
    }

    /// Build the grid described by these parameters.
    pub fn build(&self) -> SdfResult<BackgroundGrid> {
        BackgroundGrid::new(*self)
    }
}

/// `num` evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// A single sample collapses onto `start`. The last sample is pinned to
/// `stop` so the extent is reproduced exactly.
pub fn linspace(start: Real, stop: Real, num: usize) -> Vec<Real> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as Real;
            let mut samples: Vec<Real> =
                (0..num).map(|i| start + i as Real * step).collect();
            samples[num - 1] = stop;
            samples
        },
    }
}

/// An immutable square lattice of query points.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundGrid {
    spec: GridSpec,
    /// Sample values shared by both axes.
    axis: Vec<Real>,
    points: Vec<Point2<Real>>,
}

impl BackgroundGrid {
    /// Lay out `spec.nseed²` points spanning `[-spec.side, spec.side]²`.
    pub fn new(spec: GridSpec) -> SdfResult<Self> {
        spec.validate()?;

        let n = spec.nseed;
        let axis = linspace(-spec.side, spec.side, n);

        let points = (0..n)
            .flat_map(|block| {
                let y = axis[spec.layout.row_of_block(block, n)];
                axis.iter().map(move |&x| Point2::new(x, y))
            })
            .collect();

        Ok(Self { spec, axis, points })
    }

    /// Recover the grid behind a flat point sequence, such as the one
    /// returned by [`build_grid`] or [`crate::compute_sdf`].
    ///
    /// The sample count comes from the sequence length and the half-extent
    /// from the first point; either layout is accepted. Anything that is not
    /// such a lattice is [`SdfError::InvalidGrid`].
    pub fn from_points(points: &[Point2<Real>]) -> SdfResult<Self> {
        let nseed = points.len().isqrt();
        if nseed == 0 || nseed * nseed != points.len() {
            return Err(SdfError::InvalidGrid(format!(
                "{} points do not form a square lattice",
                points.len()
            )));
        }

        let side = -points[0].x;
        let eps = tolerance() * side.abs().max(1.0);
        for layout in [GridLayout::Shifted, GridLayout::RowMajor] {
            let grid = Self::new(GridSpec::new(side, nseed).with_layout(layout))?;
            let same = grid
                .points
                .iter()
                .zip(points)
                .all(|(a, b)| (a - b).norm() <= eps);
            if same {
                return Ok(grid);
            }
        }

        Err(SdfError::InvalidGrid(format!(
            "points are not a {nseed}x{nseed} lattice over [-{side}, {side}]"
        )))
    }

    /// Grid with the default [`GridLayout`].
    pub fn square(side: Real, nseed: usize) -> SdfResult<Self> {
        Self::new(GridSpec::new(side, nseed))
    }

    pub const fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub const fn side(&self) -> Real {
        self.spec.side
    }

    pub const fn nseed(&self) -> usize {
        self.spec.nseed
    }

    pub const fn layout(&self) -> GridLayout {
        self.spec.layout
    }

    /// The per-axis sample values, ascending.
    pub fn axis(&self) -> &[Real] {
        &self.axis
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance between neighbouring samples (zero for a single sample).
    pub fn spacing(&self) -> Real {
        if self.spec.nseed < 2 {
            0.0
        } else {
            self.axis[1] - self.axis[0]
        }
    }

    /// Flat point index of lattice node (`row`, `col`), where `row` walks
    /// axis 2 and `col` walks axis 1. `None` outside the lattice.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.spec.nseed;
        if row >= n || col >= n {
            return None;
        }
        Some(self.spec.layout.block_of_row(row, n) * n + col)
    }

    /// Lattice coordinates `(row, col)` of a flat point index.
    pub fn lattice_of(&self, index: usize) -> Option<(usize, usize)> {
        let n = self.spec.nseed;
        if index >= self.points.len() {
            return None;
        }
        Some((self.spec.layout.row_of_block(index / n, n), index % n))
    }
}

/// Build the point sequence of a square background grid with the default
/// layout, see [`BackgroundGrid::new`].
pub fn build_grid(side: Real, nseed: usize) -> SdfResult<Vec<Point2<Real>>> {
    Ok(BackgroundGrid::square(side, nseed)?.into_points())
}
