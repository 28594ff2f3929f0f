//! Mesh geometry buffers delivered by the scanning session

use crate::{Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// Triangulated surface geometry for one mesh anchor
///
/// Vertices are expressed in anchor-local space; the owning anchor's
/// transform places them in the world. `normals` carries one unit vector per
/// vertex. Scanners that only produce positions and faces can fill the
/// normals with [`MeshBuffer::compute_vertex_normals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffer {
    pub vertices: Vec<Point3f>,
    pub normals: Vec<Vector3f>,
    pub faces: Vec<[u32; 3]>,
}

impl MeshBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a buffer from vertices, per-vertex normals and faces
    pub fn from_parts(
        vertices: Vec<Point3f>,
        normals: Vec<Vector3f>,
        faces: Vec<[u32; 3]>,
    ) -> Self {
        Self {
            vertices,
            normals,
            faces,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the buffer holds no renderable surface
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Calculate face normals
    pub fn face_normals(&self) -> Vec<Vector3f> {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.vertices[face[0] as usize];
                let v1 = self.vertices[face[1] as usize];
                let v2 = self.vertices[face[2] as usize];

                let edge1 = v1 - v0;
                let edge2 = v2 - v0;

                edge1.cross(&edge2).normalize()
            })
            .collect()
    }

    /// Recompute per-vertex normals by averaging the adjacent face normals
    ///
    /// Replaces whatever `normals` currently holds. Vertices referenced by no
    /// face get a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let face_normals = self.face_normals();
        let mut normals = vec![Vector3f::zeros(); self.vertices.len()];

        for (face, normal) in self.faces.iter().zip(&face_normals) {
            for &index in face {
                normals[index as usize] += normal;
            }
        }

        for normal in &mut normals {
            let length = normal.norm();
            if length > f32::EPSILON {
                *normal /= length;
            }
        }

        self.normals = normals;
    }
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_quad() -> MeshBuffer {
        MeshBuffer::from_parts(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 1.0),
                Point3f::new(0.0, 0.0, 1.0),
            ],
            Vec::new(),
            vec![[0, 2, 1], [0, 3, 2]],
        )
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = MeshBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.vertex_count(), 0);
        assert_eq!(buffer.face_count(), 0);
    }

    #[test]
    fn test_flat_quad_normals_point_up() {
        let mut buffer = flat_quad();
        buffer.compute_vertex_normals();

        assert_eq!(buffer.normals.len(), buffer.vertex_count());
        for normal in &buffer.normals {
            assert_relative_eq!(normal.y, 1.0, epsilon = 1e-6);
            assert_relative_eq!(normal.x, 0.0, epsilon = 1e-6);
            assert_relative_eq!(normal.z, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_unreferenced_vertex_gets_zero_normal() {
        let mut buffer = flat_quad();
        buffer.vertices.push(Point3f::new(5.0, 5.0, 5.0));
        buffer.compute_vertex_normals();

        assert_eq!(buffer.normals.len(), 5);
        assert_relative_eq!(buffer.normals[4].norm(), 0.0);
    }
}
