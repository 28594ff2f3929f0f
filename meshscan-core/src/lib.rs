//! Core data structures for meshscan
//!
//! This crate provides the fundamental types shared by the scanning-session
//! adapter and the scene-graph layer: anchor identifiers and payloads, mesh
//! geometry buffers as delivered by the scanner, RGBA colors, and 3D
//! transforms.

pub mod anchor;
pub mod color;
pub mod error;
pub mod mesh;
pub mod transform;

pub use anchor::*;
pub use color::*;
pub use error::*;
pub use mesh::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;
