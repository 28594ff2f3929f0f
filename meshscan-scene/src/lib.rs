//! Scene-graph and renderable geometry for meshscan
//!
//! This crate sits between the scanning session and whatever renderer
//! displays the scan: it converts mesh anchor buffers into renderable
//! [`Geometry`] (including the per-vertex "normal forest" debug overlay) and
//! organizes the result into named [`SceneNode`]s inside a [`Scene`]. The
//! renderer itself is an external collaborator; this crate stops at Pod
//! vertex buffers ready for upload.

pub mod geometry;
pub mod node;
pub mod scene;

pub use geometry::*;
pub use node::*;
pub use scene::*;
