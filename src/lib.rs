//! Signed distance functions from closed 2D boundary meshes, evaluated on the
//! nodes of a regular background grid, for use in **unfitted finite element
//! methods** where an implicit surface on a fixed grid replaces a
//! body-fitted mesh.
//!
//! For every grid node the nearest boundary vertex is found through a
//! kd-tree. Its distance gives the magnitude, and the sign comes from the
//! side of that vertex's outgoing edge the node lies on:
//! `z = (B - A) × (P - A)`, negative distance when `z < 0`.
//!
//! ```
//! use msh2sdf::{boundary::Boundary, grid::GridSpec, sdf::compute_field};
//!
//! let circle = Boundary::circle(2.0, 1000).unwrap();
//! let field = compute_field(&circle, GridSpec::new(2.5, 5)).unwrap();
//! assert_eq!(field.len(), 25);
//! // the circle runs counter-clockwise, so its interior is positive
//! assert!(field.value_at(2, 2).unwrap() > 0.0);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: use hashbrown for the vertex to outgoing-edge lookup
//! - **image-io**: `.png` field plots
//! - **svg-io**: `.svg` field plots
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to evaluate grid nodes on multiple threads

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod boundary;
pub mod errors;
pub mod float_types;
pub mod grid;
pub mod io;
pub mod sdf;
pub mod spatial;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use boundary::{Boundary, generate_circle};
pub use errors::{SdfError, SdfResult};
pub use grid::{BackgroundGrid, GridLayout, GridSpec, build_grid};
pub use io::{plot_sdf, plot_sdf_arrays};
pub use sdf::{SignedDistanceField, compute_sdf};
