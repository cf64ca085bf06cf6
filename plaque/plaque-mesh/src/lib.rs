//! Braille plaque mesh generation for TactileForge.
//!
//! This crate turns a Braille glyph string into a 3D-printable plaque: a
//! rectangular base box with one raised stud per Braille dot.
//!
//! - [`PlaqueParams`] - Physical dimensions with documented defaults
//! - [`TriangleMesh`] / [`Facet`] - Triangle soup with outward unit normals
//! - [`build_plaque`] - Glyph grid to mesh plus bounding dimensions
//!
//! # Units and Coordinates
//!
//! All coordinates are `f64` millimeters in a right-handed system:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up, print direction)
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**;
//! stored normals always agree with the winding.
//!
//! # Example
//!
//! ```
//! use braille_translate::to_braille;
//! use plaque_mesh::{build_plaque, PlaqueParams};
//!
//! let braille = to_braille("Hi!");
//! let plaque = build_plaque(&braille, &PlaqueParams::default());
//! println!("{:.1} x {:.1} mm, {} facets",
//!     plaque.width_mm, plaque.height_mm, plaque.mesh.facet_count());
//! ```
//!
//! Building is pure and deterministic: no I/O, no shared state, identical
//! inputs give byte-identical facet sequences.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod mesh;
mod params;
mod primitives;

pub use builder::{build_plaque, Plaque};
pub use mesh::{Facet, TriangleMesh};
pub use params::{PlaqueParams, MIN_BASE_MM, MM_PER_INCH};
pub use primitives::{push_box, push_stud, stud_facets, BOX_FACETS};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
