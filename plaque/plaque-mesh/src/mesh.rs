//! Triangle-soup mesh with per-facet normals.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One triangle of the plaque surface.
///
/// Stores an outward unit normal and three vertices in mm. Winding is
/// counter-clockwise when viewed from outside, so the stored normal agrees
/// with the normal a consumer would recompute from the vertex order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facet {
    /// Outward unit normal.
    pub normal: Vector3<f64>,
    /// Vertices in CCW order viewed from outside.
    pub vertices: [Point3<f64>; 3],
}

/// An ordered triangle soup.
///
/// Plaques are emitted as independent facets, the way ASCII STL consumes
/// them; vertices shared between facets are duplicated on purpose and no
/// deduplication happens here.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use plaque_mesh::TriangleMesh;
///
/// let mut mesh = TriangleMesh::new();
/// mesh.push_triangle(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(mesh.facet_count(), 1);
/// assert!((mesh.facets[0].normal.z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Facets in emission order.
    pub facets: Vec<Facet>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Create a mesh with pre-allocated facet capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(facet_count: usize) -> Self {
        Self {
            facets: Vec::with_capacity(facet_count),
        }
    }

    /// Number of facets.
    #[inline]
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Whether the mesh has no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Append a triangle, computing its normal from the vertex winding.
    ///
    /// The normal is the normalized cross product of the edge vectors
    /// `v1 - v0` and `v2 - v0`. A degenerate (zero-area) triangle gets a
    /// unit +Z placeholder normal instead of dividing by zero.
    pub fn push_triangle(&mut self, v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) {
        let normal = winding_normal(v0, v1, v2);
        self.facets.push(Facet {
            normal,
            vertices: [v0, v1, v2],
        });
    }
}

/// Unit normal of a triangle from its winding, +Z placeholder if degenerate.
#[must_use]
fn winding_normal(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Vector3<f64> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let normal = e1.cross(&e2);
    let len_sq = normal.norm_squared();
    if len_sq > f64::EPSILON {
        normal / len_sq.sqrt()
    } else {
        Vector3::z()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_follows_winding() {
        let mut mesh = TriangleMesh::new();
        mesh.push_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let n = mesh.facets[0].normal;
        assert!(n.x.abs() < 1e-12);
        assert!(n.y.abs() < 1e-12);
        assert!((n.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_winding_flips_normal() {
        let mut mesh = TriangleMesh::new();
        mesh.push_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        );
        assert!((mesh.facets[0].normal.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn normals_are_unit_length() {
        let mut mesh = TriangleMesh::new();
        mesh.push_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(137.0, 0.0, 0.0),
            Point3::new(0.0, 0.5, 42.0),
        );
        assert!((mesh.facets[0].normal.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_triangle_gets_placeholder_normal() {
        let mut mesh = TriangleMesh::new();
        // collinear vertices, zero area
        mesh.push_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let n = mesh.facets[0].normal;
        assert!((n.norm() - 1.0).abs() < 1e-12);
        assert!((n.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn capacity_constructor_is_empty() {
        let mesh = TriangleMesh::with_capacity(128);
        assert!(mesh.is_empty());
        assert_eq!(mesh.facet_count(), 0);
    }
}
