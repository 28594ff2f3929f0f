//! Renderable geometry built from mesh anchor buffers

use bytemuck::{Pod, Zeroable};
use meshscan_core::{Color, Error, MeshBuffer, Point3f, Result, Vector3f};
use serde::{Deserialize, Serialize};

/// A renderer-ready vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

unsafe impl Pod for Vertex {}
unsafe impl Zeroable for Vertex {}

/// Surface material applied to a whole geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub diffuse: Color,
}

impl Material {
    /// Create a material with the given diffuse color
    pub fn diffuse(color: Color) -> Self {
        Self { diffuse: color }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::WHITE)
    }
}

/// Primitive topology of a geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitives {
    Triangles(Vec<[u32; 3]>),
    Lines(Vec<[u32; 2]>),
}

impl Primitives {
    /// Number of primitives regardless of topology
    pub fn len(&self) -> usize {
        match self {
            Primitives::Triangles(faces) => faces.len(),
            Primitives::Lines(segments) => segments.len(),
        }
    }

    /// Check if the geometry holds no primitives
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A renderable geometry with a single material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub positions: Vec<Point3f>,
    pub normals: Vec<Vector3f>,
    pub primitives: Primitives,
    pub material: Material,
}

impl Geometry {
    /// Convert a mesh anchor buffer into triangle geometry
    ///
    /// Positions and per-vertex normals are carried through unchanged; the
    /// material starts out as the default and is assigned by the caller.
    /// Fails if the buffer's normals do not pair one-to-one with its
    /// vertices or a face indexes past the vertex array.
    pub fn from_mesh_buffer(buffer: &MeshBuffer) -> Result<Self> {
        Self::check_normals(buffer)?;
        Self::check_faces(buffer)?;

        Ok(Self {
            positions: buffer.vertices.clone(),
            normals: buffer.normals.clone(),
            primitives: Primitives::Triangles(buffer.faces.clone()),
            material: Material::default(),
        })
    }

    /// Build the "normal forest" debug overlay for a mesh anchor buffer
    ///
    /// One line segment per vertex, from the vertex along its unit normal by
    /// `length`. A zero normal yields a zero-length segment rather than NaN.
    pub fn normal_forest(buffer: &MeshBuffer, length: f32) -> Result<Self> {
        Self::check_normals(buffer)?;

        let mut positions = Vec::with_capacity(buffer.vertices.len() * 2);
        let mut normals = Vec::with_capacity(buffer.vertices.len() * 2);
        let mut segments = Vec::with_capacity(buffer.vertices.len());

        for (i, (vertex, normal)) in buffer.vertices.iter().zip(&buffer.normals).enumerate() {
            let direction = normal
                .try_normalize(f32::EPSILON)
                .unwrap_or_else(Vector3f::zeros);
            let tip = vertex + direction * length;

            positions.push(*vertex);
            positions.push(tip);
            normals.push(direction);
            normals.push(direction);
            segments.push([2 * i as u32, 2 * i as u32 + 1]);
        }

        Ok(Self {
            positions,
            normals,
            primitives: Primitives::Lines(segments),
            material: Material::default(),
        })
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Flatten into Pod vertices for upload by the renderer
    pub fn vertex_buffer(&self) -> Vec<Vertex> {
        let color = self.material.diffuse.to_array();
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(position, normal)| Vertex {
                position: [position.x, position.y, position.z],
                normal: [normal.x, normal.y, normal.z],
                color,
            })
            .collect()
    }

    /// Flatten the primitive indices for upload by the renderer
    pub fn index_buffer(&self) -> Vec<u32> {
        match &self.primitives {
            Primitives::Triangles(faces) => faces.iter().flatten().copied().collect(),
            Primitives::Lines(segments) => segments.iter().flatten().copied().collect(),
        }
    }

    fn check_normals(buffer: &MeshBuffer) -> Result<()> {
        if buffer.normals.len() != buffer.vertices.len() {
            return Err(Error::MalformedBuffer(format!(
                "{} normals for {} vertices",
                buffer.normals.len(),
                buffer.vertices.len()
            )));
        }
        Ok(())
    }

    fn check_faces(buffer: &MeshBuffer) -> Result<()> {
        let vertex_count = buffer.vertices.len() as u32;
        for face in &buffer.faces {
            if face.iter().any(|&index| index >= vertex_count) {
                return Err(Error::MalformedBuffer(format!(
                    "face {:?} indexes past {} vertices",
                    face, vertex_count
                )));
            }
        }
        Ok(())
    }
}
