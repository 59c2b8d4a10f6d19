//! Triangle mesh representation
//!
//! A mesh is either a triangle soup (3 vertices per triangle, in order)
//! or an indexed buffer (shared vertices plus a `[u32; 3]` index list).
//! Meshes are immutable once built; the transform stage clones rather
//! than mutating in place.

use crate::error::{MeshError, MeshResult};
use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    /// Extent per axis.
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Z extent (build height of the pose).
    pub fn height(&self) -> f64 {
        (self.max.z - self.min.z).max(0.0)
    }

    /// Smallest extent across the three axes.
    pub fn min_dimension(&self) -> f64 {
        let s = self.size();
        s.x.min(s.y).min(s.z)
    }

    fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Aabb {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;
        for p in points {
            if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                continue;
            }
            any = true;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        if !any {
            return Aabb {
                min: Point3::origin(),
                max: Point3::origin(),
            };
        }
        Aabb { min, max }
    }
}

/// An immutable triangle mesh in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point3<f64>>,
    indices: Option<Vec<[u32; 3]>>,
}

impl TriangleMesh {
    /// Build a mesh from a triangle soup: 3 consecutive vertices per
    /// triangle.
    pub fn from_triangles(vertices: Vec<Point3<f64>>) -> MeshResult<Self> {
        if vertices.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        if vertices.len() % 3 != 0 {
            return Err(MeshError::RaggedSoup {
                count: vertices.len(),
            });
        }
        Ok(Self {
            vertices,
            indices: None,
        })
    }

    /// Build a mesh from a shared vertex buffer and a triangle index list.
    pub fn from_indexed(vertices: Vec<Point3<f64>>, indices: Vec<[u32; 3]>) -> MeshResult<Self> {
        if indices.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        let vertex_count = vertices.len();
        for tri in &indices {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self {
            vertices,
            indices: Some(indices),
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.vertices.len() / 3,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// The three corners of triangle `i`. Index validity is enforced at
    /// construction time.
    #[inline]
    pub fn triangle(&self, i: usize) -> [Point3<f64>; 3] {
        match &self.indices {
            Some(indices) => {
                let [a, b, c] = indices[i];
                [
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                ]
            }
            None => [
                self.vertices[i * 3],
                self.vertices[i * 3 + 1],
                self.vertices[i * 3 + 2],
            ],
        }
    }

    /// Iterate triangles as corner triples, straight off the buffer.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        (0..self.triangle_count()).map(move |i| self.triangle(i))
    }

    /// Recompute the axis-aligned bounding box of this mesh.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Internal: build a mesh from already-validated parts. Used by the
    /// transform stage to carry the index list through a rotation.
    pub(crate) fn from_parts(vertices: Vec<Point3<f64>>, indices: Option<Vec<[u32; 3]>>) -> Self {
        Self { vertices, indices }
    }

    pub(crate) fn indices(&self) -> Option<&[[u32; 3]]> {
        self.indices.as_deref()
    }
}
