//! Anchors tracked by the scanning session

use crate::{MeshBuffer, Transform3D};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable, opaque identifier for a tracked anchor
///
/// Supplied by the scanner and reused across every update of the same
/// physical-world fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorId(Uuid);

impl AnchorId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnchorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AnchorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The payload a tracked anchor carries
///
/// The visualizer only recognizes the `Mesh` variant; every other kind
/// passes through it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnchorKind {
    /// A reconstructed surface fragment
    Mesh(MeshBuffer),
    /// A detected planar region
    Plane,
    /// A recognized reference image
    Image,
    /// A bare point fixed in world space
    World,
}

impl AnchorKind {
    /// Whether this anchor carries reconstructed mesh geometry
    pub fn is_mesh(&self) -> bool {
        matches!(self, AnchorKind::Mesh(_))
    }
}

/// A tracked point or region in physical space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: AnchorId,
    /// Pose of the anchor in world space
    pub transform: Transform3D,
    pub kind: AnchorKind,
}

impl Anchor {
    /// Create an anchor of any kind
    pub fn new(id: AnchorId, transform: Transform3D, kind: AnchorKind) -> Self {
        Self {
            id,
            transform,
            kind,
        }
    }

    /// Create a mesh anchor from a geometry buffer
    pub fn mesh(id: AnchorId, transform: Transform3D, buffer: MeshBuffer) -> Self {
        Self::new(id, transform, AnchorKind::Mesh(buffer))
    }

    /// The mesh buffer, if this is a mesh anchor
    pub fn mesh_buffer(&self) -> Option<&MeshBuffer> {
        match &self.kind {
            AnchorKind::Mesh(buffer) => Some(buffer),
            _ => None,
        }
    }
}
