//! Geometry primitives for plaque assembly.
//!
//! Axis-aligned base box and raised-dot studs, emitted straight into a
//! [`TriangleMesh`]. All winding is CCW viewed from outside.

use std::f64::consts::TAU;

use nalgebra::Point3;

use crate::mesh::TriangleMesh;

/// Facets in a box: 6 faces, 2 triangles each.
pub const BOX_FACETS: usize = 12;

/// Facets in one stud for a given segment count.
///
/// `segments` lateral quads split into 2 triangles each, plus a fan of
/// `segments` top-cap triangles. Studs have no bottom cap; they sit flush
/// on the base top face.
#[inline]
#[must_use]
pub const fn stud_facets(segments: usize) -> usize {
    segments * 3
}

/// Append an axis-aligned box with one corner at the origin.
///
/// Spans `[0, width] x [0, height] x [0, thickness]` in mm, emitted as 12
/// triangles.
pub fn push_box(mesh: &mut TriangleMesh, width: f64, height: f64, thickness: f64) {
    let (w, h, t) = (width, height, thickness);

    // 8 corners, bottom ring then top ring
    let c = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(w, 0.0, 0.0),
        Point3::new(w, h, 0.0),
        Point3::new(0.0, h, 0.0),
        Point3::new(0.0, 0.0, t),
        Point3::new(w, 0.0, t),
        Point3::new(w, h, t),
        Point3::new(0.0, h, t),
    ];

    // Bottom face (z=0) - normal points -Z
    mesh.push_triangle(c[0], c[2], c[1]);
    mesh.push_triangle(c[0], c[3], c[2]);

    // Top face (z=t) - normal points +Z
    mesh.push_triangle(c[4], c[5], c[6]);
    mesh.push_triangle(c[4], c[6], c[7]);

    // Front face (y=0) - normal points -Y
    mesh.push_triangle(c[0], c[1], c[5]);
    mesh.push_triangle(c[0], c[5], c[4]);

    // Back face (y=h) - normal points +Y
    mesh.push_triangle(c[3], c[7], c[6]);
    mesh.push_triangle(c[3], c[6], c[2]);

    // Left face (x=0) - normal points -X
    mesh.push_triangle(c[0], c[4], c[7]);
    mesh.push_triangle(c[0], c[7], c[3]);

    // Right face (x=w) - normal points +X
    mesh.push_triangle(c[1], c[2], c[6]);
    mesh.push_triangle(c[1], c[6], c[5]);
}

/// Append one raised-dot stud: an open cylinder with a top cap.
///
/// The lateral surface is `segments` quads (2 triangles each); the top cap
/// is a fan of `segments` triangles around a shared center vertex. There is
/// no bottom cap: the stud base sits at `z0` flush on, and fused with, the
/// plaque top face.
pub fn push_stud(
    mesh: &mut TriangleMesh,
    cx: f64,
    cy: f64,
    z0: f64,
    radius: f64,
    height: f64,
    segments: usize,
) {
    let z1 = z0 + height;
    let center_top = Point3::new(cx, cy, z1);

    for i in 0..segments {
        #[allow(clippy::cast_precision_loss)] // segment counts stay tiny
        let (a0, a1) = (
            (i as f64 / segments as f64) * TAU,
            ((i + 1) as f64 / segments as f64) * TAU,
        );
        let (x0, y0) = (cx + radius * a0.cos(), cy + radius * a0.sin());
        let (x1, y1) = (cx + radius * a1.cos(), cy + radius * a1.sin());

        let p00 = Point3::new(x0, y0, z0);
        let p01 = Point3::new(x1, y1, z0);
        let p10 = Point3::new(x0, y0, z1);
        let p11 = Point3::new(x1, y1, z1);

        // lateral quad, outward
        mesh.push_triangle(p00, p01, p11);
        mesh.push_triangle(p00, p11, p10);

        // top cap, +Z
        mesh.push_triangle(center_top, p10, p11);
    }
}
