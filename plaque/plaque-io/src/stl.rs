//! ASCII STL serialization.
//!
//! Emits the standard ASCII STL record for triangulated solids:
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Coordinates are plain fixed-point decimals in millimeters. Output is
//! byte-deterministic: no locale, time, or randomness enters formatting.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use plaque_mesh::{build_plaque, PlaqueParams, TriangleMesh};
use tracing::info;

use crate::error::{ExportError, ExportResult};

/// Solid name written on the `solid` and `endsolid` marker lines.
///
/// The name records the unit convention so downstream slicers that surface
/// it give the operator a hint.
pub const SOLID_NAME: &str = "braille_plaque_units_mm";

/// Serialize a mesh as an ASCII STL document.
///
/// The document starts with `solid braille_plaque_units_mm`, ends with the
/// matching `endsolid` line, and carries one facet block per triangle in
/// mesh order.
///
/// # Example
///
/// ```
/// use plaque_mesh::TriangleMesh;
/// use plaque_io::{stl_to_string, SOLID_NAME};
///
/// let stl = stl_to_string(&TriangleMesh::new());
/// assert!(stl.starts_with("solid "));
/// assert_eq!(stl.trim_end(), format!("endsolid {SOLID_NAME}"));
/// ```
#[must_use]
pub fn stl_to_string(mesh: &TriangleMesh) -> String {
    // ~200 bytes per facet block
    let mut out = String::with_capacity(64 + mesh.facet_count() * 200);

    let _ = writeln!(out, "solid {SOLID_NAME}");
    for facet in &mesh.facets {
        let n = facet.normal;
        let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        let _ = writeln!(out, "    outer loop");
        for v in &facet.vertices {
            let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", v.x, v.y, v.z);
        }
        let _ = writeln!(out, "    endloop");
        let _ = writeln!(out, "  endfacet");
    }
    let _ = writeln!(out, "endsolid {SOLID_NAME}");

    out
}

/// Write a mesh as ASCII STL to a writer.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_stl<W: Write>(mesh: &TriangleMesh, mut writer: W) -> ExportResult<()> {
    writer.write_all(stl_to_string(mesh).as_bytes())?;
    Ok(())
}

/// Save a mesh as an ASCII STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use plaque_mesh::{build_plaque, PlaqueParams};
/// use plaque_io::save_stl;
///
/// let plaque = build_plaque("⠓⠊", &PlaqueParams::default());
/// save_stl(&plaque.mesh, "hi.stl").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_stl(mesh, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), facets = mesh.facet_count(), "saved STL");
    Ok(())
}

/// A serialized plaque: STL document plus bounding dimensions.
#[derive(Debug, Clone)]
pub struct PlaqueStl {
    /// ASCII STL document.
    pub stl: String,

    /// Plaque width in mm.
    pub width_mm: f64,

    /// Plaque height in mm.
    pub height_mm: f64,

    /// Requested total thickness in mm.
    pub total_mm: f64,
}

/// Build a plaque from Braille glyphs and serialize it in one step.
///
/// Convenience for callers that only want the document and its dimensions,
/// without handling the mesh.
///
/// # Example
///
/// ```
/// use braille_translate::to_braille;
/// use plaque_io::plaque_stl;
/// use plaque_mesh::PlaqueParams;
///
/// let result = plaque_stl(&to_braille("abc"), &PlaqueParams::default());
/// assert!(result.stl.starts_with("solid "));
/// assert!(result.width_mm > 0.0);
/// ```
#[must_use]
pub fn plaque_stl(braille: &str, params: &PlaqueParams) -> PlaqueStl {
    let plaque = build_plaque(braille, params);
    PlaqueStl {
        stl: stl_to_string(&plaque.mesh),
        width_mm: plaque.width_mm,
        height_mm: plaque.height_mm,
        total_mm: plaque.total_mm,
    }
}
