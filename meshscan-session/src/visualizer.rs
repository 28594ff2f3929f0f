//! Anchor-event to scene-node adapter

use crate::Colorizer;
use meshscan_core::{Anchor, AnchorId, AnchorKind, Color, MeshBuffer};
use meshscan_scene::{Geometry, Material, SceneNode};
use tracing::warn;

/// Name of the normals-overlay child under every mesh anchor node
pub const NORMALS_NODE_NAME: &str = "normals";

/// Default world-space length of each normal-overlay segment, in meters
pub const DEFAULT_NORMAL_LENGTH: f32 = 0.02;

/// Builds and refreshes the scene node for each mesh anchor
///
/// Purely reactive: all per-anchor state lives in the [`Colorizer`] passed
/// to each call and in the scene nodes themselves. Anchors of any kind
/// other than mesh pass through untouched.
#[derive(Debug, Clone)]
pub struct MeshVisualizer {
    normal_length: f32,
}

impl MeshVisualizer {
    /// Create a visualizer with the default normal-overlay length
    pub fn new() -> Self {
        Self {
            normal_length: DEFAULT_NORMAL_LENGTH,
        }
    }

    /// Create a visualizer with a custom normal-overlay length
    pub fn with_normal_length(normal_length: f32) -> Self {
        Self { normal_length }
    }

    /// The deterministic scene-node name for an anchor
    pub fn node_name(id: AnchorId) -> String {
        format!("anchor-{id}")
    }

    /// Build the node for a newly added anchor
    ///
    /// Returns `None` for non-mesh anchors and for mesh buffers that fail
    /// conversion; neither case assigns a color.
    pub fn node_for_anchor(
        &self,
        anchor: &Anchor,
        colorizer: &mut Colorizer,
    ) -> Option<SceneNode> {
        let AnchorKind::Mesh(buffer) = &anchor.kind else {
            return None;
        };

        // Main node
        let mut geometry = match Geometry::from_mesh_buffer(buffer) {
            Ok(geometry) => geometry,
            Err(err) => {
                warn!(anchor = %anchor.id, %err, "ignoring mesh anchor");
                return None;
            }
        };
        geometry.material = Material::diffuse(colorizer.assign_color(anchor.id));

        let mut node = SceneNode::with_geometry(Self::node_name(anchor.id), geometry);
        node.transform = anchor.transform;

        // Normals node
        if let Some(forest) = self.normal_forest(buffer, anchor.id) {
            node.add_child(SceneNode::with_geometry(NORMALS_NODE_NAME, forest));
        }

        Some(node)
    }

    /// Refresh an existing node from an updated anchor
    ///
    /// Replaces the main geometry wholesale and re-tints it with the
    /// anchor's cached color. A `"normals"` child, if present, gets its
    /// geometry regenerated; if absent, none is added. Non-mesh anchors
    /// and failed conversions leave the node untouched.
    pub fn update_node(&self, node: &mut SceneNode, anchor: &Anchor, colorizer: &mut Colorizer) {
        let AnchorKind::Mesh(buffer) = &anchor.kind else {
            return;
        };

        // Main node
        let mut geometry = match Geometry::from_mesh_buffer(buffer) {
            Ok(geometry) => geometry,
            Err(err) => {
                warn!(anchor = %anchor.id, %err, "ignoring mesh anchor update");
                return;
            }
        };
        geometry.material = Material::diffuse(colorizer.assign_color(anchor.id));
        node.geometry = Some(geometry);
        node.transform = anchor.transform;

        // Normals node
        if let Some(normals_node) = node.child_mut(NORMALS_NODE_NAME) {
            if let Some(forest) = self.normal_forest(buffer, anchor.id) {
                normals_node.geometry = Some(forest);
            }
        }
    }

    fn normal_forest(&self, buffer: &MeshBuffer, id: AnchorId) -> Option<Geometry> {
        match Geometry::normal_forest(buffer, self.normal_length) {
            Ok(mut forest) => {
                forest.material = Material::diffuse(Color::RED);
                Some(forest)
            }
            Err(err) => {
                warn!(anchor = %id, %err, "skipping normals overlay");
                None
            }
        }
    }
}

impl Default for MeshVisualizer {
    fn default() -> Self {
        Self::new()
    }
}
