//! Plaque serialization and export for TactileForge.
//!
//! This crate turns generated plaque meshes into ASCII STL documents that
//! standard 3D-printing toolchains consume:
//!
//! - [`stl_to_string`] / [`write_stl`] / [`save_stl`] - ASCII STL output
//! - [`plaque_stl`] - Braille glyphs to STL document in one step
//! - [`sanitize_file_base`] - Filesystem-safe output names
//!
//! # Format
//!
//! Output is the standard ASCII STL convention: a `solid <name>` line,
//! facet blocks of normal + three vertices, and a matching `endsolid`
//! line. The solid name is fixed ([`SOLID_NAME`]) and coordinates are
//! fixed-point millimeters, so identical inputs serialize byte-identically.
//!
//! # Example
//!
//! ```
//! use braille_translate::to_braille;
//! use plaque_io::{plaque_stl, sanitize_file_base};
//! use plaque_mesh::PlaqueParams;
//!
//! let text = "Room 101";
//! let result = plaque_stl(&to_braille(text), &PlaqueParams::default());
//! let filename = format!("{}.stl", sanitize_file_base(text));
//! assert_eq!(filename, "Room_101.stl");
//! assert!(result.stl.starts_with("solid "));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod filename;
mod stl;

pub use error::{ExportError, ExportResult};
pub use filename::{sanitize_file_base, DEFAULT_FILE_BASE};
pub use stl::{plaque_stl, save_stl, stl_to_string, write_stl, PlaqueStl, SOLID_NAME};
